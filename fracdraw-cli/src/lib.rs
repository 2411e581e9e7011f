//! Library half of the `fracdraw` binary: config file handling and the pattern
//! explanations used by `fracdraw explain`.

pub mod config;
pub mod explain;
