//! Request file ingestion.
//!
//! A request file is a `.csv` file with one `kind,depth` pair per line, each field a
//! single digit. Unlike a tolerant CSV reader this loader is strict: the first bad
//! line rejects the whole file, so nothing is drawn from a partially valid input.

mod error;
mod load;
mod parse;

pub use error::{LineError, RequestLoadError};
pub use load::{LoadOptions, REQUEST_FILE_EXTENSION, load_requests};
pub use parse::{parse_line, parse_requests};
