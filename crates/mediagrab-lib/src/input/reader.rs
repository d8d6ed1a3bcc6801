use super::model::{ExtractedMedia, MediaKind};
use crate::error::MediaGrabError;
use std::path::Path;
use tracing::debug;

/// Maps a CSV header to the kind of media its cells hold, or `None` for
/// columns that carry no media URLs. Child-post video columns
/// (`childPosts/<n>/videoUrl`) are classified once, as reels.
fn classify_header(header: &str) -> Option<MediaKind> {
    if header.contains("displayUrl") || header.contains("images") {
        Some(MediaKind::Image)
    } else if header.contains("videoUrl") {
        if header.contains("childPosts") {
            Some(MediaKind::Reel)
        } else {
            Some(MediaKind::Video)
        }
    } else {
        None
    }
}

/// Walks the CSV row by row and collects every non-empty URL cell from
/// the media columns, in row-major order.
pub fn read_media_urls(path: &Path) -> Result<Vec<ExtractedMedia>, MediaGrabError> {
    let mut reader = csv::Reader::from_path(path)?;

    let columns: Vec<(usize, MediaKind)> = reader
        .headers()?
        .iter()
        .enumerate()
        .filter_map(|(index, header)| classify_header(header).map(|kind| (index, kind)))
        .collect();
    debug!(path = %path.display(), media_columns = columns.len(), "Classified input columns");

    let mut media = Vec::new();
    for record in reader.records() {
        let record = record?;
        for (index, kind) in &columns {
            if let Some(value) = record.get(*index) {
                let url = value.trim();
                if !url.is_empty() {
                    media.push(ExtractedMedia {
                        url: url.to_string(),
                        kind: *kind,
                    });
                }
            }
        }
    }
    Ok(media)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("tempfile");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn test_classify_header() {
        assert_eq!(classify_header("displayUrl"), Some(MediaKind::Image));
        assert_eq!(classify_header("images/0"), Some(MediaKind::Image));
        assert_eq!(classify_header("videoUrl"), Some(MediaKind::Video));
        assert_eq!(
            classify_header("childPosts/3/videoUrl"),
            Some(MediaKind::Reel)
        );
        assert_eq!(classify_header("caption"), None);
        assert_eq!(classify_header("ownerUsername"), None);
    }

    #[test]
    fn test_reads_media_cells_in_row_major_order() {
        let file = write_csv(
            "caption,displayUrl,videoUrl\n\
             \"first, with comma\",https://x/a.jpg,https://x/a.mp4\n\
             second,https://x/b.jpg,\n",
        );

        let media = read_media_urls(file.path()).expect("read succeeds");
        let urls: Vec<_> = media.iter().map(|m| m.url.as_str()).collect();
        assert_eq!(
            urls,
            ["https://x/a.jpg", "https://x/a.mp4", "https://x/b.jpg"]
        );
        assert_eq!(media[0].kind, MediaKind::Image);
        assert_eq!(media[1].kind, MediaKind::Video);
    }

    #[test]
    fn test_child_post_columns_counted_once_as_reels() {
        let file = write_csv(
            "videoUrl,childPosts/0/videoUrl\n\
             https://x/v.mp4,https://x/r.mp4\n",
        );

        let media = read_media_urls(file.path()).expect("read succeeds");
        assert_eq!(media.len(), 2);
        assert_eq!(media[0].kind, MediaKind::Video);
        assert_eq!(media[1].kind, MediaKind::Reel);
    }

    #[test]
    fn test_skips_empty_and_whitespace_cells() {
        let file = write_csv(
            "displayUrl,videoUrl\n\
             ,\n\
             https://x/a.jpg,   \n",
        );

        let media = read_media_urls(file.path()).expect("read succeeds");
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].url, "https://x/a.jpg");
    }

    #[test]
    fn test_table_without_media_columns_yields_nothing() {
        let file = write_csv("caption,likes\nhello,42\n");
        let media = read_media_urls(file.path()).expect("read succeeds");
        assert!(media.is_empty());
    }
}
