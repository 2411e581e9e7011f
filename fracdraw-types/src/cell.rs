use serde::{Deserialize, Serialize};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Blank,
    Drawn,
}

impl Cell {
    pub fn is_drawn(self) -> bool {
        matches!(self, Cell::Drawn)
    }
    pub fn is_blank(self) -> bool {
        matches!(self, Cell::Blank)
    }
}
