//! Domain logic: turn a pattern kind and a depth into a filled grid.
//!
//! This crate owns *which* cells are drawn. It does not own how a grid becomes text;
//! that's the `fracdraw-render` crate.

mod builder;
mod catalog;
mod error;
mod factory;
mod pattern;

pub use builder::{GridBuilder, build};
pub use catalog::{CATALOG, definition, lookup};
pub use error::PatternError;
pub use factory::{grid_for, make_grid};
pub use pattern::{Offset, PatternDefinition};
