//! Rendering helpers (plain text) for finished grids.

use fracdraw_types::{Cell, Grid, glyph};

/// Characters used for the two cell states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub drawn: char,
    pub blank: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            drawn: glyph::DRAWN,
            blank: glyph::BLANK,
        }
    }
}

impl RenderOptions {
    /// Default options with a different drawn glyph. The blank glyph stays a space.
    pub fn with_drawn(drawn: char) -> Self {
        Self {
            drawn,
            ..Self::default()
        }
    }
}

/// Renders a grid with the default glyphs.
///
/// One line per row, one character per cell, each line ending in `\n`, followed by
/// one empty line.
pub fn render_grid(grid: &Grid) -> String {
    render_grid_with(grid, &RenderOptions::default())
}

pub fn render_grid_with(grid: &Grid, opts: &RenderOptions) -> String {
    let mut out = String::with_capacity((grid.side() + 1) * grid.side() + 1);
    for row in grid.rows() {
        out.extend(row.iter().map(|cell| cell_glyph(*cell, opts)));
        out.push('\n');
    }
    out.push('\n');
    out
}

fn cell_glyph(cell: Cell, opts: &RenderOptions) -> char {
    match cell {
        Cell::Drawn => opts.drawn,
        Cell::Blank => opts.blank,
    }
}
