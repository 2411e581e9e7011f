use crate::error::RequestLoadError;
use crate::parse::parse_requests;
use camino::Utf8Path;
use fracdraw_types::Request;
use fs_err as fs;
use tracing::debug;

/// The only extension accepted when `require_csv_extension` is set.
pub const REQUEST_FILE_EXTENSION: &str = "csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject files whose extension is not exactly `csv`.
    pub require_csv_extension: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            require_csv_extension: true,
        }
    }
}

/// Loads and validates every request in `path`, in file order.
pub fn load_requests(
    path: &Utf8Path,
    opts: &LoadOptions,
) -> Result<Vec<Request>, RequestLoadError> {
    if !path.exists() {
        return Err(RequestLoadError::Missing {
            path: path.to_path_buf(),
        });
    }
    if opts.require_csv_extension && path.extension() != Some(REQUEST_FILE_EXTENSION) {
        return Err(RequestLoadError::WrongExtension {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path, "reading request file");
    let contents = fs::read_to_string(path).map_err(|e| RequestLoadError::Io {
        message: e.to_string(),
    })?;

    let requests = parse_requests(&contents)?;
    debug!(path = %path, count = requests.len(), "loaded requests");
    Ok(requests)
}
