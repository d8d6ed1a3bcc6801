use crate::input::MediaKind;
use digest::Digest;
use md5::Md5;
use std::path::Path;

/// Destination routing tag, attached when a filename is resolved so that
/// nothing downstream has to re-derive it from filename text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileCategory {
    Image,
    Video,
}

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const IMAGE_FALLBACK_PREFIX: &str = "img_";

/// Derives a destination filename from a URL: the last path segment
/// (query string and fragment excluded), verbatim. URLs without a usable
/// segment get a deterministic `{prefix}_{md5(url)}.{ext}` fallback, so
/// the same URL always maps to the same filename.
pub fn resolve_filename(url: &str, kind: MediaKind) -> String {
    if let Some(segment) = last_path_segment(url) {
        return segment.to_string();
    }
    format!(
        "{}_{}.{}",
        kind.fallback_prefix(),
        hex::encode(Md5::digest(url.as_bytes())),
        kind.default_extension()
    )
}

fn last_path_segment(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    match path.rsplit_once('/') {
        Some((_, segment)) if !segment.is_empty() => Some(segment),
        _ => None,
    }
}

/// Routes a resolved filename to its destination category. Evaluated
/// against the filename, not the original URL: the filename is what
/// determines the write path.
pub fn categorize(filename: &str) -> FileCategory {
    if filename.starts_with(IMAGE_FALLBACK_PREFIX) {
        return FileCategory::Image;
    }
    let is_image_extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|image_ext| ext.eq_ignore_ascii_case(image_ext))
        });
    if is_image_extension {
        FileCategory::Image
    } else {
        FileCategory::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_last_path_segment() {
        assert_eq!(
            resolve_filename("https://x/a/b/c.jpg", MediaKind::Image),
            "c.jpg"
        );
        assert_eq!(
            resolve_filename("https://cdn.example.com/v/clip.mp4", MediaKind::Video),
            "clip.mp4"
        );
    }

    #[test]
    fn test_resolve_strips_query_and_fragment() {
        assert_eq!(
            resolve_filename("https://x/a/c.jpg?token=abc&exp=1", MediaKind::Image),
            "c.jpg"
        );
        assert_eq!(
            resolve_filename("https://x/a/c.mp4#t=30", MediaKind::Video),
            "c.mp4"
        );
    }

    #[test]
    fn test_resolve_falls_back_when_no_segment() {
        let name = resolve_filename("https://x/?a=1", MediaKind::Image);
        assert!(name.starts_with("img_"));
        assert!(name.ends_with(".jpg"));

        let name = resolve_filename("not-a-url", MediaKind::Video);
        assert!(name.starts_with("vid_"));
        assert!(name.ends_with(".mp4"));

        let name = resolve_filename("", MediaKind::Reel);
        assert!(name.starts_with("vid_reel_"));
        assert!(name.ends_with(".mp4"));
    }

    #[test]
    fn test_resolve_fallback_is_deterministic() {
        let first = resolve_filename("https://x/?a=1", MediaKind::Image);
        let second = resolve_filename("https://x/?a=1", MediaKind::Image);
        assert_eq!(first, second);

        // Different URLs must not collide.
        let other = resolve_filename("https://x/?a=2", MediaKind::Image);
        assert_ne!(first, other);
    }

    #[test]
    fn test_categorize_by_extension() {
        assert_eq!(categorize("c.jpg"), FileCategory::Image);
        assert_eq!(categorize("c.JPEG"), FileCategory::Image);
        assert_eq!(categorize("shot.png"), FileCategory::Image);
        assert_eq!(categorize("clip.mp4"), FileCategory::Video);
        assert_eq!(categorize("clip.webm"), FileCategory::Video);
        assert_eq!(categorize("no_extension"), FileCategory::Video);
    }

    #[test]
    fn test_categorize_by_fallback_prefix() {
        let name = resolve_filename("https://x/?a=1", MediaKind::Image);
        assert_eq!(categorize(&name), FileCategory::Image);

        let name = resolve_filename("https://x/?a=1", MediaKind::Reel);
        assert_eq!(categorize(&name), FileCategory::Video);
    }

    #[test]
    fn test_categorize_prefers_filename_over_origin() {
        // A video-column URL that resolves to a .jpg name routes as an
        // image: the filename decides the write path.
        let name = resolve_filename("https://x/a/poster.jpg", MediaKind::Video);
        assert_eq!(categorize(&name), FileCategory::Image);
    }
}
