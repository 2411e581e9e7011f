use crate::builder::GridBuilder;
use crate::catalog::{definition, lookup};
use crate::error::PatternError;
use fracdraw_types::{Grid, Request};

/// Builds the grid for a raw kind index and depth.
///
/// Equivalent to `build(lookup(index)?, depth)`; no validation beyond what those two
/// already do.
pub fn make_grid(index: u32, depth: u32) -> Result<Grid, PatternError> {
    GridBuilder::new(lookup(index)?).build(depth)
}

/// Builds the grid for an already-validated request.
pub fn grid_for(request: &Request) -> Result<Grid, PatternError> {
    GridBuilder::new(definition(request.kind)).build(request.depth)
}
