//! Pattern explanation module for the `fracdraw explain` command.
//!
//! Pairs each catalog entry with a prose description and derives the
//! tables printed by `explain` and `list-patterns`.

use fracdraw_domain::{PatternDefinition, build, definition};
use fracdraw_render::render_grid;
use fracdraw_types::{PatternKind, bounds};

/// Prose that goes with a catalog entry.
#[derive(Debug, Clone)]
pub struct PatternExplanation {
    /// Which pattern this describes.
    pub kind: PatternKind,
    /// What the pattern looks like and how the stencil produces it.
    pub description: &'static str,
}

impl PatternExplanation {
    pub fn definition(&self) -> &'static PatternDefinition {
        definition(self.kind)
    }
}

/// Registry of all pattern explanations, in catalog order.
pub static PATTERN_REGISTRY: &[PatternExplanation] = &[
    PatternExplanation {
        kind: PatternKind::Carpet,
        description: r#"Splits every tile into a 3x3 block and keeps all sub-tiles except the
centre one. Repeating this at every level punches square holes of every size
into the grid, leaving 8 of every 9 cells drawn per level."#,
    },
    PatternExplanation {
        kind: PatternKind::Triangle,
        description: r#"Splits every tile into a 2x2 block and keeps the top-left, top-right and
bottom-left sub-tiles. The result is a right-angled Sierpinski triangle whose
hypotenuse runs from the top-right corner to the bottom-left corner."#,
    },
    PatternExplanation {
        kind: PatternKind::Vicsek,
        description: r#"Splits every tile into a 3x3 block and keeps the four corners and the
centre. Repeating this yields the diagonal cross ("X") form of the Vicsek
fractal."#,
    },
];

/// Look up a pattern explanation by key (`"carpet"`) or index (`"1"`).
pub fn lookup_pattern(query: &str) -> Option<&'static PatternExplanation> {
    let kind = PatternKind::parse_key(query)?;
    PATTERN_REGISTRY.iter().find(|p| p.kind == kind)
}

/// List all available pattern keys.
pub fn list_pattern_keys() -> Vec<&'static str> {
    PATTERN_REGISTRY.iter().map(|p| p.kind.key()).collect()
}

/// One row of the growth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthRow {
    pub depth: u32,
    pub side: usize,
    pub drawn_cells: usize,
}

/// Side length and drawn-cell count for every supported depth.
pub fn growth_table(def: &PatternDefinition) -> Vec<GrowthRow> {
    (bounds::MIN_DEPTH..=bounds::MAX_DEPTH)
        .filter_map(|depth| {
            Some(GrowthRow {
                depth,
                side: def.side_at(depth)?,
                drawn_cells: def.drawn_cells_at(depth)?,
            })
        })
        .collect()
}

/// The depth-1 tile, rendered without the trailing blank line.
pub fn base_tile(def: &PatternDefinition) -> anyhow::Result<String> {
    let grid = build(def, bounds::MIN_DEPTH)?;
    Ok(render_grid(&grid).trim_end_matches('\n').to_string())
}

/// Stencil offsets as `(row,col)` pairs.
pub fn format_stencil(def: &PatternDefinition) -> String {
    def.stencil()
        .iter()
        .map(|o| format!("({},{})", o.row, o.col))
        .collect::<Vec<_>>()
        .join(" ")
}
