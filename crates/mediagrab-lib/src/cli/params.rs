use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub input_path: PathBuf,
    /// Explicit concurrency ceiling; `None` lets the planner size the run.
    pub max_in_flight: Option<usize>,
}
