use super::types::{DownloadOutcome, DownloadRequest, DownloadStatus};
use crate::dedup::{ContentHash, DedupStore};
use crate::progress::ProgressSink;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

/// Processes one request end to end and always produces an outcome;
/// fetch, write, and dedup failures are recorded, never propagated.
/// Exactly one progress tick is emitted per request, on every path.
pub async fn fetch_one(
    client: &Client,
    request: &DownloadRequest,
    store: &DedupStore,
    progress: &dyn ProgressSink,
) -> DownloadOutcome {
    let status = transfer(client, request, store).await;
    progress.advance();
    DownloadOutcome {
        filename: request.filename.clone(),
        status,
    }
}

async fn transfer(
    client: &Client,
    request: &DownloadRequest,
    store: &DedupStore,
) -> DownloadStatus {
    let url = match request.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => return DownloadStatus::Failed("no url".to_string()),
    };

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            warn!(url, file = %request.filename, error = %err, "Fetch failed");
            return DownloadStatus::Failed(err.to_string());
        }
    };

    // Only a literal 200 counts as success for these media hosts.
    if response.status() != StatusCode::OK {
        let code = response.status().as_u16();
        warn!(url, file = %request.filename, code, "Unexpected status");
        return DownloadStatus::Failed(format!("status: {code}"));
    }

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(err) => {
            warn!(url, file = %request.filename, error = %err, "Body read failed");
            return DownloadStatus::Failed(err.to_string());
        }
    };

    let hash = ContentHash::of(&body);
    if !store.check_and_insert(hash) {
        info!(file = %request.filename, %hash, "Duplicate content, skipping write");
        return DownloadStatus::DuplicateSkipped;
    }

    let path = request.destination.join(&request.filename);
    match tokio::fs::write(&path, &body).await {
        Ok(()) => {
            debug!(output = %path.display(), bytes = body.len(), "Downloaded");
            DownloadStatus::Success
        }
        Err(err) => {
            warn!(output = %path.display(), error = %err, "Write failed");
            DownloadStatus::Failed(err.to_string())
        }
    }
}
