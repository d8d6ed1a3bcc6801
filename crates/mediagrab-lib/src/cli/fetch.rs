use crate::cli::params::FetchParams;
use crate::download::{FetchOptions, run_all};
use crate::error::MediaGrabError;
use crate::input::{build_requests, read_media_urls};
use crate::planner::SystemSensor;
use crate::progress::DownloadProgress;
use crate::report::render_report;
use std::sync::Arc;
use tracing::info;

pub async fn run_fetch(params: FetchParams) -> Result<(), MediaGrabError> {
    info!("Reading media URLs from {}", params.input_path.display());
    let media = read_media_urls(&params.input_path)?;
    if media.is_empty() {
        return Err(MediaGrabError::NoMediaFound {
            path: params.input_path,
        });
    }

    let plan = build_requests(&params.input_path, media)?;
    info!(
        images = plan.summary.images,
        videos = plan.summary.videos,
        total = plan.summary.total(),
        "Queued downloads"
    );

    let options = FetchOptions {
        max_in_flight: params.max_in_flight,
        ..FetchOptions::default()
    };
    let progress = Arc::new(DownloadProgress::new(plan.requests.len() as u64));
    let outcomes = run_all(plan.requests, &options, &SystemSensor, progress.clone()).await?;
    progress.finish();

    println!("{}", render_report(&outcomes));
    println!("Files saved in: {}", plan.base_dir.display());
    Ok(())
}
