//! Default port implementations.

use crate::ports::{OutputSink, RequestSource};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fracdraw_requests::{LoadOptions, RequestLoadError};
use fracdraw_types::Request;
use fs_err as fs;
use std::io::{self, BufWriter, Write};
use tracing::debug;

/// Loads requests from a file via `fracdraw_requests::load_requests`.
#[derive(Debug, Clone)]
pub struct FsRequestSource {
    pub path: Utf8PathBuf,
    pub options: LoadOptions,
}

impl FsRequestSource {
    pub fn new(path: Utf8PathBuf, options: LoadOptions) -> Self {
        Self { path, options }
    }
}

impl RequestSource for FsRequestSource {
    fn load_requests(&self) -> Result<Vec<Request>, RequestLoadError> {
        fracdraw_requests::load_requests(&self.path, &self.options)
    }
}

/// In-memory request source for embedding and testing.
///
/// Requests are handed out exactly as given; nothing is validated here.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRequestSource {
    requests: Vec<Request>,
}

impl InMemoryRequestSource {
    pub fn new(requests: Vec<Request>) -> Self {
        Self { requests }
    }
}

impl RequestSource for InMemoryRequestSource {
    fn load_requests(&self) -> Result<Vec<Request>, RequestLoadError> {
        Ok(self.requests.clone())
    }
}

/// Writes blocks to the process's standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_block(&mut self, block: &str) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(block.as_bytes()).context("write to stdout")
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        io::stdout().flush().context("flush stdout")
    }
}

/// Writes blocks to a file.
///
/// The file is created (and its parent directories) on the first block, or by
/// `finish` when there was nothing to write, so an invalid input never leaves a
/// file behind.
#[derive(Debug)]
pub struct FileSink {
    path: Utf8PathBuf,
    writer: Option<BufWriter<fs::File>>,
}

impl FileSink {
    pub fn new(path: Utf8PathBuf) -> Self {
        Self { path, writer: None }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn writer(&mut self) -> anyhow::Result<&mut BufWriter<fs::File>> {
        if self.writer.is_none() {
            if let Some(parent) = self.path.parent()
                && !parent.as_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create parent dir for {}", self.path))?;
            }
            debug!(path = %self.path, "creating output file");
            let file = fs::File::create(&self.path)
                .with_context(|| format!("create {}", self.path))?;
            self.writer = Some(BufWriter::new(file));
        }
        self.writer
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("output file {} not open", self.path))
    }
}

impl OutputSink for FileSink {
    fn write_block(&mut self, block: &str) -> anyhow::Result<()> {
        let path = self.path.clone();
        self.writer()?
            .write_all(block.as_bytes())
            .with_context(|| format!("write {}", path))
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        let path = self.path.clone();
        self.writer()?
            .flush()
            .with_context(|| format!("flush {}", path))
    }
}

/// Collects blocks in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    blocks: Vec<String>,
    finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Everything written so far, concatenated.
    pub fn contents(&self) -> String {
        self.blocks.concat()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl OutputSink for MemorySink {
    fn write_block(&mut self, block: &str) -> anyhow::Result<()> {
        self.blocks.push(block.to_string());
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.finished = true;
        Ok(())
    }
}
