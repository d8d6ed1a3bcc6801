/// Which kind of media a table column refers to. Decides the fallback
/// filename prefix and extension when a URL has no usable path segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    /// Video attached to a child post (reel); kept distinct so fallback
    /// filenames stay distinguishable, routed like any other video.
    Reel,
}

impl MediaKind {
    pub fn fallback_prefix(self) -> &'static str {
        match self {
            MediaKind::Image => "img",
            MediaKind::Video => "vid",
            MediaKind::Reel => "vid_reel",
        }
    }

    pub fn default_extension(self) -> &'static str {
        match self {
            MediaKind::Image => "jpg",
            MediaKind::Video | MediaKind::Reel => "mp4",
        }
    }
}

/// One URL pulled out of the input table, before filename resolution.
#[derive(Clone, Debug)]
pub struct ExtractedMedia {
    pub url: String,
    pub kind: MediaKind,
}

/// Counts shown in the pre-run banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MediaSummary {
    pub images: usize,
    pub videos: usize,
}

impl MediaSummary {
    pub fn total(self) -> usize {
        self.images + self.videos
    }
}
