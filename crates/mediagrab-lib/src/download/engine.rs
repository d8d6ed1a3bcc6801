use super::types::{DownloadOutcome, DownloadRequest, DownloadStatus, FetchOptions};
use super::worker::fetch_one;
use crate::dedup::DedupStore;
use crate::error::MediaGrabError;
use crate::planner::{ResourceSensor, plan};
use crate::progress::ProgressSink;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::info;

/// Fans the requests out to gated workers and fans their outcomes back
/// in, preserving submission order: the N-th outcome corresponds to the
/// N-th request no matter which fetch finishes first.
///
/// At most `max_in_flight` fetches run concurrently (caller override, or
/// the planner's sizing of the current host). The HTTP client and the
/// dedup store are shared across all workers for the duration of the run.
pub async fn run_all(
    requests: Vec<DownloadRequest>,
    options: &FetchOptions,
    sensor: &dyn ResourceSensor,
    progress: Arc<dyn ProgressSink>,
) -> Result<Vec<DownloadOutcome>, MediaGrabError> {
    if requests.is_empty() {
        return Ok(Vec::new());
    }

    let max_in_flight = match options.max_in_flight {
        Some(limit) => limit,
        None => plan(sensor.snapshot()),
    };
    info!(
        requests = requests.len(),
        max_in_flight, "Starting download run"
    );

    let client = reqwest::Client::builder().timeout(options.timeout).build()?;
    let store = Arc::new(DedupStore::new());
    let gate = Arc::new(Semaphore::new(max_in_flight));

    let filenames: Vec<String> = requests.iter().map(|r| r.filename.clone()).collect();

    let mut handles = Vec::with_capacity(requests.len());
    for request in requests {
        let client = client.clone();
        let store = store.clone();
        let gate = gate.clone();
        let progress = progress.clone();
        handles.push(tokio::spawn(async move {
            // Acquire before fetch, release (drop) after. The gate is
            // never closed, so acquisition only fails if the run is
            // torn down; that still yields an outcome and a tick.
            let _permit = match gate.acquire_owned().await {
                Ok(permit) => permit,
                Err(err) => {
                    progress.advance();
                    return DownloadOutcome {
                        filename: request.filename.clone(),
                        status: DownloadStatus::Failed(err.to_string()),
                    };
                }
            };
            fetch_one(&client, &request, &store, progress.as_ref()).await
        }));
    }

    // Await in submission order. A panicked worker still yields an
    // outcome so the one-outcome-per-request invariant holds.
    let mut outcomes = Vec::with_capacity(handles.len());
    for (joined, filename) in join_all(handles).await.into_iter().zip(filenames) {
        outcomes.push(joined.unwrap_or_else(|err| DownloadOutcome {
            filename,
            status: DownloadStatus::Failed(err.to_string()),
        }));
    }

    info!(
        downloaded = store.len(),
        outcomes = outcomes.len(),
        "Download run finished"
    );
    Ok(outcomes)
}
