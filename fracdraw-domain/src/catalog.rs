//! The fixed set of patterns fracdraw can draw.

use crate::error::PatternError;
use crate::pattern::{Offset, PatternDefinition};
use fracdraw_types::PatternKind;

/// Every tile except the center.
static CARPET_STENCIL: [Offset; 8] = [
    Offset::new(0, 0),
    Offset::new(0, 1),
    Offset::new(0, 2),
    Offset::new(1, 0),
    Offset::new(1, 2),
    Offset::new(2, 0),
    Offset::new(2, 1),
    Offset::new(2, 2),
];

/// Every tile except bottom-right.
static TRIANGLE_STENCIL: [Offset; 3] = [Offset::new(0, 0), Offset::new(0, 1), Offset::new(1, 0)];

/// Corners plus center.
static VICSEK_STENCIL: [Offset; 5] = [
    Offset::new(0, 0),
    Offset::new(0, 2),
    Offset::new(1, 1),
    Offset::new(2, 0),
    Offset::new(2, 2),
];

/// Pattern definitions in index order.
pub static CATALOG: [PatternDefinition; 3] = [
    PatternDefinition::new(PatternKind::Carpet, 3, &CARPET_STENCIL),
    PatternDefinition::new(PatternKind::Triangle, 2, &TRIANGLE_STENCIL),
    PatternDefinition::new(PatternKind::Vicsek, 3, &VICSEK_STENCIL),
];

/// Definition for a kind. Total over `PatternKind`.
pub fn definition(kind: PatternKind) -> &'static PatternDefinition {
    match kind {
        PatternKind::Carpet => &CATALOG[0],
        PatternKind::Triangle => &CATALOG[1],
        PatternKind::Vicsek => &CATALOG[2],
    }
}

/// Definition for a request-file index (1-based).
pub fn lookup(index: u32) -> Result<&'static PatternDefinition, PatternError> {
    PatternKind::from_index(index)
        .map(definition)
        .ok_or(PatternError::InvalidKind { index })
}
