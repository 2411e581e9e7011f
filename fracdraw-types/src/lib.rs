//! Shared value types for the fracdraw workspace.
//!
//! # Design constraints
//! - Everything here is plain data: no I/O, no logging.
//! - `PatternKind` is a closed set. Adding a kind means touching the catalog in
//!   `fracdraw-domain` as well.
//! - Grids are always square.

pub mod cell;
pub mod grid;
pub mod kind;
pub mod request;

pub use cell::Cell;
pub use grid::Grid;
pub use kind::PatternKind;
pub use request::Request;

/// Accepted ranges for request fields.
pub mod bounds {
    /// Smallest pattern index accepted from a request file.
    pub const MIN_INDEX: u32 = 1;
    /// Largest pattern index accepted from a request file.
    pub const MAX_INDEX: u32 = 3;
    /// Smallest recursion depth.
    pub const MIN_DEPTH: u32 = 1;
    /// Largest recursion depth.
    pub const MAX_DEPTH: u32 = 6;

    /// Returns true if `depth` is inside `[MIN_DEPTH, MAX_DEPTH]`.
    pub fn depth_in_range(depth: u32) -> bool {
        (MIN_DEPTH..=MAX_DEPTH).contains(&depth)
    }
}

/// Characters used when a grid is turned into text.
pub mod glyph {
    pub const DRAWN: char = '#';
    pub const BLANK: char = ' ';
}
