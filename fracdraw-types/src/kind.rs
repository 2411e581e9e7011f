use serde::{Deserialize, Serialize};
use std::fmt;

/// The fractal families fracdraw knows how to draw.
///
/// Request files refer to them by index:
/// - 1: Sierpinski carpet
/// - 2: Sierpinski triangle
/// - 3: Vicsek fractal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Carpet,
    Triangle,
    Vicsek,
}

impl PatternKind {
    /// Every kind, in index order.
    pub const ALL: [PatternKind; 3] = [
        PatternKind::Carpet,
        PatternKind::Triangle,
        PatternKind::Vicsek,
    ];

    /// Maps a request-file index to a kind.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(PatternKind::Carpet),
            2 => Some(PatternKind::Triangle),
            3 => Some(PatternKind::Vicsek),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        match self {
            PatternKind::Carpet => 1,
            PatternKind::Triangle => 2,
            PatternKind::Vicsek => 3,
        }
    }

    /// Short user-facing key (e.g. `"carpet"`).
    pub fn key(self) -> &'static str {
        match self {
            PatternKind::Carpet => "carpet",
            PatternKind::Triangle => "triangle",
            PatternKind::Vicsek => "vicsek",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PatternKind::Carpet => "Sierpinski Carpet",
            PatternKind::Triangle => "Sierpinski Triangle",
            PatternKind::Vicsek => "Vicsek Fractal",
        }
    }

    /// Resolves a key (`"carpet"`, case-insensitive) or an index (`"1"`).
    pub fn parse_key(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u32>() {
            return Self::from_index(index);
        }
        Self::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_for_every_kind() {
        for kind in PatternKind::ALL {
            assert_eq!(PatternKind::from_index(kind.index()), Some(kind));
        }
    }

    #[test]
    fn indexes_outside_catalog_are_rejected() {
        assert_eq!(PatternKind::from_index(0), None);
        assert_eq!(PatternKind::from_index(4), None);
    }

    #[test]
    fn parse_key_accepts_names_and_indexes() {
        assert_eq!(PatternKind::parse_key("carpet"), Some(PatternKind::Carpet));
        assert_eq!(PatternKind::parse_key("Vicsek"), Some(PatternKind::Vicsek));
        assert_eq!(PatternKind::parse_key("2"), Some(PatternKind::Triangle));
        assert_eq!(PatternKind::parse_key("koch"), None);
        assert_eq!(PatternKind::parse_key("9"), None);
    }
}
