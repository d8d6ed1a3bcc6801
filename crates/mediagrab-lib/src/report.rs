use crate::download::{DownloadOutcome, DownloadStatus};
use std::fmt::Write;

fn status_label(status: &DownloadStatus) -> String {
    match status {
        DownloadStatus::Success => "✔ success".to_string(),
        DownloadStatus::DuplicateSkipped => "✔ duplicate skipped".to_string(),
        DownloadStatus::Failed(reason) => format!("✖ failed - {reason}"),
    }
}

/// Renders the per-file outcome table shown after a run. Every request
/// gets a row, skipped and failed items included.
pub fn render_report(outcomes: &[DownloadOutcome]) -> String {
    const NAME_HEADER: &str = "File Name";
    const STATUS_HEADER: &str = "Status";

    let name_width = outcomes
        .iter()
        .map(|o| o.filename.chars().count())
        .chain([NAME_HEADER.chars().count()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{NAME_HEADER:<name_width$}  {STATUS_HEADER}");
    let _ = writeln!(out, "{}  {}", "-".repeat(name_width), "-".repeat(STATUS_HEADER.len()));
    for outcome in outcomes {
        let _ = writeln!(
            out,
            "{:<name_width$}  {}",
            outcome.filename,
            status_label(&outcome.status)
        );
    }
    out
}
