//! Port traits abstracting all I/O away from the pipeline.

use fracdraw_requests::RequestLoadError;
use fracdraw_types::Request;

/// Source of draw requests, in the order they were listed.
pub trait RequestSource {
    fn load_requests(&self) -> Result<Vec<Request>, RequestLoadError>;
}

/// Destination for rendered blocks.
pub trait OutputSink {
    /// Writes one rendered grid, including its trailing blank line.
    fn write_block(&mut self, block: &str) -> anyhow::Result<()>;

    /// Flushes buffered output. Called once after the last block.
    fn finish(&mut self) -> anyhow::Result<()>;
}
