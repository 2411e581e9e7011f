use fracdraw_types::bounds::{MAX_DEPTH, MAX_INDEX, MIN_DEPTH, MIN_INDEX};
use thiserror::Error;

/// Precondition violations the builder and catalog can report.
///
/// Requests that come through the request loader never trigger these; they exist so a
/// direct caller gets a rejection instead of a silently defaulted pattern.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("invalid pattern kind {index} (expected {min}..={max})", min = MIN_INDEX, max = MAX_INDEX)]
    InvalidKind { index: u32 },

    #[error("invalid depth {depth} (expected {min}..={max})", min = MIN_DEPTH, max = MAX_DEPTH)]
    InvalidDepth { depth: u32 },
}

#[cfg(test)]
mod tests {
    use super::PatternError;

    #[test]
    fn invalid_kind_names_the_range() {
        let err = PatternError::InvalidKind { index: 7 };
        assert_eq!(err.to_string(), "invalid pattern kind 7 (expected 1..=3)");
    }

    #[test]
    fn invalid_depth_names_the_range() {
        let err = PatternError::InvalidDepth { depth: 0 };
        assert_eq!(err.to_string(), "invalid depth 0 (expected 1..=6)");
    }
}
