use fracdraw_types::PatternKind;
use serde::Serialize;

/// Position of an active sub-tile inside the base tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Offset {
    pub row: usize,
    pub col: usize,
}

impl Offset {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Immutable description of a self-similar pattern.
///
/// At depth 1 the grid is `base_size x base_size` with exactly the stencil cells drawn.
/// Each further level replaces every drawn cell with a scaled copy of the whole
/// pattern.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PatternDefinition {
    kind: PatternKind,
    base_size: usize,
    stencil: &'static [Offset],
}

impl PatternDefinition {
    pub(crate) const fn new(
        kind: PatternKind,
        base_size: usize,
        stencil: &'static [Offset],
    ) -> Self {
        Self {
            kind,
            base_size,
            stencil,
        }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Edge length of the depth-1 tile.
    pub fn base_size(&self) -> usize {
        self.base_size
    }

    pub fn stencil(&self) -> &'static [Offset] {
        self.stencil
    }

    /// Grid edge length at `depth` (`base_size^depth`), or `None` if it doesn't fit
    /// in a `usize`.
    pub fn side_at(&self, depth: u32) -> Option<usize> {
        self.base_size.checked_pow(depth)
    }

    /// Number of drawn cells at `depth` (`stencil.len()^depth`), or `None` on overflow.
    pub fn drawn_cells_at(&self, depth: u32) -> Option<usize> {
        self.stencil.len().checked_pow(depth)
    }

    /// Whether the sub-tile at `(row, col)` of the base tile is active.
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.stencil.contains(&Offset::new(row, col))
    }
}
