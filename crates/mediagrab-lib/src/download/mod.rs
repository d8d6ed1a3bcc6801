mod engine;
mod types;
mod worker;

pub use engine::run_all;
pub use types::{DownloadOutcome, DownloadRequest, DownloadStatus, FetchOptions};
pub use worker::fetch_one;
