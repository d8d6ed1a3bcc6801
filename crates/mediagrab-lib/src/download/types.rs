use std::path::PathBuf;
use std::time::Duration;

/// One unit of work: fetch `url` and write it as `destination/filename`.
/// `url` may be absent; such requests still produce an explicit outcome.
#[derive(Clone, Debug)]
pub struct DownloadRequest {
    pub url: Option<String>,
    pub destination: PathBuf,
    pub filename: String,
}

/// Terminal result of processing one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadStatus {
    Success,
    /// Identical content was already written by another request this run.
    /// A deliberate skip, not a failure.
    DuplicateSkipped,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub filename: String,
    pub status: DownloadStatus,
}

#[derive(Clone, Copy, Debug)]
pub struct FetchOptions {
    /// Explicit in-flight ceiling; `None` asks the planner.
    pub max_in_flight: Option<usize>,
    /// Total per-request timeout, covering connect through body read.
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_in_flight: None,
            timeout: Duration::from_secs(600),
        }
    }
}
