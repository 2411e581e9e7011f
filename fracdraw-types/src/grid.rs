use crate::cell::Cell;

/// Square, row-major grid of cells.
///
/// A grid is created all-blank and only ever gains drawn cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `side x side` grid with every cell blank.
    pub fn blank(side: usize) -> Self {
        Self {
            side,
            cells: vec![Cell::Blank; side * side],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (`side * side`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.side || col >= self.side {
            return None;
        }
        Some(self.cells[row * self.side + col])
    }

    /// Marks `(row, col)` as drawn.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn mark_drawn(&mut self, row: usize, col: usize) {
        assert!(
            row < self.side && col < self.side,
            "cell ({row}, {col}) outside {side}x{side} grid",
            side = self.side
        );
        self.cells[row * self.side + col] = Cell::Drawn;
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.side.max(1))
    }

    pub fn drawn_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_drawn()).count()
    }

    /// Copies the `side x side` window whose top-left corner is `(row, col)`.
    ///
    /// Returns `None` if the window does not fit inside this grid.
    pub fn window(&self, row: usize, col: usize, side: usize) -> Option<Grid> {
        if row + side > self.side || col + side > self.side {
            return None;
        }
        let mut cells = Vec::with_capacity(side * side);
        for r in row..row + side {
            let start = r * self.side + col;
            cells.extend_from_slice(&self.cells[start..start + side]);
        }
        Some(Grid { side, cells })
    }
}
