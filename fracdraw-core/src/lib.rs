//! Embeddable core library for fracdraw.
//!
//! Provides a clap-free, I/O-abstracted entry point suitable for linking
//! into other host processes.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`RequestSource`](ports::RequestSource): load validated draw requests
//! - [`OutputSink`](ports::OutputSink): receive rendered text blocks
//!
//! The [`adapters`] module provides filesystem, stdout and in-memory implementations.
//!
//! # Entry points
//!
//! - [`run_draw`](pipeline::run_draw): render every request through the given ports

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

// Re-export the loader types so callers don't need fracdraw-requests directly.
pub use fracdraw_requests::{LineError, LoadOptions, RequestLoadError};
