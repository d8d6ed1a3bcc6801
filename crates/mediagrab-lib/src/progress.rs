use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-request completion signal; one `advance` per finished request,
/// total known up front. Implementations must be safe to call from any
/// worker task.
pub trait ProgressSink: Send + Sync {
    fn advance(&self);
}

/// Sink for library callers that do not render progress.
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn advance(&self) {}
}

/// Tick counter for tests.
#[derive(Default)]
pub struct CountingProgress {
    ticks: AtomicUsize,
}

impl CountingProgress {
    pub fn count(&self) -> usize {
        self.ticks.load(Ordering::SeqCst)
    }
}

impl ProgressSink for CountingProgress {
    fn advance(&self) {
        self.ticks.fetch_add(1, Ordering::SeqCst);
    }
}

/// Terminal progress bar shown during a download run.
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} files ({elapsed} elapsed, {eta} remaining)",
            )
            .expect("progress template is valid")
            .progress_chars("━━╌"),
        );
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish();
    }
}

impl ProgressSink for DownloadProgress {
    fn advance(&self) {
        self.bar.inc(1);
    }
}
