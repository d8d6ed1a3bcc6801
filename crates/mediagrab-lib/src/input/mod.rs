mod model;
mod reader;

pub use model::{ExtractedMedia, MediaKind, MediaSummary};
pub use reader::read_media_urls;

use crate::download::DownloadRequest;
use crate::error::MediaGrabError;
use crate::naming::{FileCategory, categorize, resolve_filename};
use std::path::{Path, PathBuf};

/// Requests ready for the download engine, plus what the CLI needs for
/// its banner and final message.
#[derive(Clone, Debug)]
pub struct RequestPlan {
    pub requests: Vec<DownloadRequest>,
    pub summary: MediaSummary,
    pub base_dir: PathBuf,
}

/// Resolves filenames, routes each item to `{base}/images/` or
/// `{base}/videos/` by its resolved-filename category, and creates both
/// directories up front; workers never create directories. The base
/// directory sits next to the input file and takes its stem.
pub fn build_requests(
    input_path: &Path,
    media: Vec<ExtractedMedia>,
) -> Result<RequestPlan, MediaGrabError> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("downloads");
    let base_dir = match input_path.parent() {
        Some(parent) => parent.join(stem),
        None => PathBuf::from(stem),
    };
    let image_dir = base_dir.join("images");
    let video_dir = base_dir.join("videos");
    for dir in [&image_dir, &video_dir] {
        std::fs::create_dir_all(dir).map_err(|err| MediaGrabError::OutputDirectoryCreation {
            path: dir.clone(),
            reason: err.to_string(),
        })?;
    }

    let mut summary = MediaSummary::default();
    let requests = media
        .into_iter()
        .map(|item| {
            let filename = resolve_filename(&item.url, item.kind);
            let destination = match categorize(&filename) {
                FileCategory::Image => {
                    summary.images += 1;
                    image_dir.clone()
                }
                FileCategory::Video => {
                    summary.videos += 1;
                    video_dir.clone()
                }
            };
            DownloadRequest {
                url: Some(item.url),
                destination,
                filename,
            }
        })
        .collect();

    Ok(RequestPlan {
        requests,
        summary,
        base_dir,
    })
}
