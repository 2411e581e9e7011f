//! The draw pipeline, extracted from the CLI.
//!
//! This entry point is I/O-agnostic: requests come from a [`RequestSource`] and text
//! goes to an [`OutputSink`].

use crate::adapters::{FileSink, FsRequestSource, StdoutSink};
use crate::ports::{OutputSink, RequestSource};
use crate::settings::DrawSettings;
use fracdraw_domain::{PatternError, grid_for};
use fracdraw_render::render_grid_with;
use fracdraw_requests::RequestLoadError;
use fracdraw_types::Request;
use tracing::debug;

/// Error type for pipeline results.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The request file was missing, had the wrong extension, or a line failed
    /// validation. Nothing was rendered.
    #[error("invalid input")]
    InvalidInput(#[from] RequestLoadError),

    /// A request reached the builder with a kind or depth it cannot draw.
    #[error("invalid request")]
    InvalidRequest(#[from] PatternError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ToolError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ToolError::InvalidInput(_) | ToolError::InvalidRequest(_))
    }

    /// Recommended process exit code.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// What was drawn for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnRequest {
    pub request: Request,
    pub side: usize,
    pub drawn_cells: usize,
}

/// Outcome of `run_draw`, in rendering order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawOutcome {
    pub drawn: Vec<DrawnRequest>,
}

/// Run the draw pipeline.
///
/// All requests are loaded (and so validated) before anything is written. They are
/// then rendered last-listed first; each request is built, rendered and written
/// before the next one starts. The first request that cannot be built stops the run.
pub fn run_draw(
    settings: &DrawSettings,
    source: &dyn RequestSource,
    sink: &mut dyn OutputSink,
) -> Result<DrawOutcome, ToolError> {
    let requests = source.load_requests()?;
    debug!(count = requests.len(), "drawing requests in reverse order");

    let render_opts = settings.render_options();
    let mut outcome = DrawOutcome::default();

    for request in requests.iter().rev() {
        let grid = grid_for(request)?;
        let text = render_grid_with(&grid, &render_opts);
        sink.write_block(&text)?;

        debug!(
            kind = %request.kind,
            depth = request.depth,
            side = grid.side(),
            "rendered request"
        );
        outcome.drawn.push(DrawnRequest {
            request: *request,
            side: grid.side(),
            drawn_cells: grid.drawn_count(),
        });
    }

    sink.finish()?;
    Ok(outcome)
}

/// Run the draw pipeline with the filesystem request source and the sink chosen by
/// `settings.output` (stdout when unset).
pub fn run_draw_with_defaults(settings: &DrawSettings) -> Result<DrawOutcome, ToolError> {
    let source = FsRequestSource::new(settings.input.clone(), settings.load_options());
    match &settings.output {
        Some(path) => run_draw(settings, &source, &mut FileSink::new(path.clone())),
        None => run_draw(settings, &source, &mut StdoutSink),
    }
}
