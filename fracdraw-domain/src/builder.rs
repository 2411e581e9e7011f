use crate::error::PatternError;
use crate::pattern::PatternDefinition;
use fracdraw_types::{Grid, bounds};
use tracing::trace;

/// Fills a grid for one pattern definition by recursive coordinate scaling.
///
/// Sub-tiles chosen at different levels never overlap, so every write lands on a
/// blank cell and the visiting order does not matter.
#[derive(Debug, Clone, Copy)]
pub struct GridBuilder<'a> {
    definition: &'a PatternDefinition,
}

impl<'a> GridBuilder<'a> {
    pub fn new(definition: &'a PatternDefinition) -> Self {
        Self { definition }
    }

    /// Builds the `base_size^depth` grid for this pattern.
    ///
    /// Depth must lie in `[MIN_DEPTH, MAX_DEPTH]`; anything else, including 0, is
    /// rejected with [`PatternError::InvalidDepth`].
    pub fn build(&self, depth: u32) -> Result<Grid, PatternError> {
        if !bounds::depth_in_range(depth) {
            return Err(PatternError::InvalidDepth { depth });
        }

        let side = self
            .definition
            .side_at(depth)
            .ok_or(PatternError::InvalidDepth { depth })?;
        let mut grid = Grid::blank(side);
        self.fill(&mut grid, 0, 0, depth);

        trace!(kind = %self.definition.kind(), depth, side, "built grid");
        Ok(grid)
    }

    fn fill(&self, grid: &mut Grid, row: usize, col: usize, remaining: u32) {
        if remaining == 0 {
            grid.mark_drawn(row, col);
            return;
        }

        let edge = self.definition.base_size().pow(remaining - 1);
        for offset in self.definition.stencil() {
            self.fill(
                grid,
                row + offset.row * edge,
                col + offset.col * edge,
                remaining - 1,
            );
        }
    }
}

/// Shorthand for `GridBuilder::new(definition).build(depth)`.
pub fn build(definition: &PatternDefinition, depth: u32) -> Result<Grid, PatternError> {
    GridBuilder::new(definition).build(depth)
}
