use crate::kind::PatternKind;
use serde::{Deserialize, Serialize};

/// One line of a request file: which pattern to draw and how deep to recurse.
///
/// The loader in `fracdraw-requests` only ever hands out requests whose depth is
/// inside [`crate::bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Request {
    pub kind: PatternKind,
    pub depth: u32,
}

impl Request {
    pub fn new(kind: PatternKind, depth: u32) -> Self {
        Self { kind, depth }
    }
}
