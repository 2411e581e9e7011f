use camino::Utf8PathBuf;
use fracdraw_types::bounds::{MAX_DEPTH, MAX_INDEX, MIN_DEPTH, MIN_INDEX};
use thiserror::Error;

/// Why a request file was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestLoadError {
    #[error("request file not found: {path}")]
    Missing { path: Utf8PathBuf },

    #[error("request file must have a .csv extension: {path}")]
    WrongExtension { path: Utf8PathBuf },

    #[error("io error: {message}")]
    Io { message: String },

    #[error("line {line}")]
    Line { line: usize, source: LineError },
}

/// Why a single line was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("empty line")]
    Empty,

    #[error("malformed field {field:?} (expected a single digit)")]
    MalformedField { field: String },

    #[error("expected 2 fields, found {found}")]
    FieldCount { found: usize },

    #[error("pattern index {value} out of range ({min}..={max})", min = MIN_INDEX, max = MAX_INDEX)]
    KindOutOfRange { value: u32 },

    #[error("depth {value} out of range ({min}..={max})", min = MIN_DEPTH, max = MAX_DEPTH)]
    DepthOutOfRange { value: u32 },
}

impl RequestLoadError {
    /// 1-based line number for line-level failures.
    pub fn line(&self) -> Option<usize> {
        match self {
            RequestLoadError::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}
