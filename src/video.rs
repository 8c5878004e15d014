/// Video platform detection for reading list URLs
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const YOUTUBE_EMBED: &str = "https://www.youtube-nocookie.com/embed/";
const YOUTUBE_THUMBNAIL: &str = "https://img.youtube.com/vi/";
const VIMEO_EMBED: &str = "https://player.vimeo.com/video/";
const TIKTOK_EMBED: &str = "https://www.tiktok.com/embed/v2/";
const YOUTUBE_WATCH: &str = "https://www.youtube.com/watch?v=";
const VIMEO_WATCH: &str = "https://vimeo.com/";

static YOUTUBE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.)?(?:youtu\.be/|youtube\.com/(?:embed/|v/|watch\?v=|watch\?.+&v=|shorts/))([A-Za-z0-9_-]{11})",
    )
    .expect("youtube pattern")
});

static VIMEO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:https?://)?(?:www\.)?vimeo\.com/([0-9]+)").expect("vimeo pattern"));

static TIKTOK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?tiktok\.com/@[A-Za-z0-9_.-]+/video/([0-9]+)").expect("tiktok pattern")
});

/// Supported video hosts, in match precedence order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    YouTube,
    Vimeo,
    TikTok,
}

impl Platform {
    const ALL: [Platform; 3] = [Platform::YouTube, Platform::Vimeo, Platform::TikTok];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Vimeo => "vimeo",
            Platform::TikTok => "tiktok",
        }
    }

    /// Name shown to people, e.g. "Open in YouTube"
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Vimeo => "Vimeo",
            Platform::TikTok => "TikTok",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Platform::YouTube => &YOUTUBE,
            Platform::Vimeo => &VIMEO,
            Platform::TikTok => &TIKTOK,
        }
    }

    fn embed_url(&self, id: &str) -> String {
        let base = match self {
            Platform::YouTube => YOUTUBE_EMBED,
            Platform::Vimeo => VIMEO_EMBED,
            Platform::TikTok => TIKTOK_EMBED,
        };
        format!("{}{}", base, id)
    }
}

/// Embeddable reference derived from a URL. Never cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoReference {
    pub platform: Option<Platform>,
    pub external_id: String,
    pub embed_url: String,
}

impl VideoReference {
    fn none() -> Self {
        VideoReference::default()
    }

    pub fn is_video(&self) -> bool {
        self.platform.is_some()
    }
}

/// Classify a URL as one of the known video platforms
///
/// Patterns are tried in order (YouTube, Vimeo, TikTok) and the first match
/// wins. Anything else, including the empty string, yields a reference with
/// no platform and empty id/embed URL.
///
/// Examples:
/// - https://youtu.be/dQw4w9WgXcQ → youtube / dQw4w9WgXcQ
/// - https://vimeo.com/123456789 → vimeo / 123456789
/// - https://example.com/article → none
pub fn classify(url: &str) -> VideoReference {
    Platform::ALL
        .iter()
        .find_map(|platform| {
            platform.pattern().captures(url).and_then(|caps| caps.get(1)).map(|id| VideoReference {
                platform: Some(*platform),
                external_id: id.as_str().to_string(),
                embed_url: platform.embed_url(id.as_str()),
            })
        })
        .unwrap_or_else(VideoReference::none)
}

pub fn is_video(url: &str) -> bool {
    classify(url).is_video()
}

/// Thumbnail image for a video reference
///
/// Only YouTube exposes an unauthenticated thumbnail endpoint; every other
/// case returns an empty string.
pub fn thumbnail_url(reference: &VideoReference) -> String {
    match reference.platform {
        Some(Platform::YouTube) => format!("{}{}/mqdefault.jpg", YOUTUBE_THUMBNAIL, reference.external_id),
        Some(Platform::Vimeo) | Some(Platform::TikTok) | None => String::new(),
    }
}

/// Page to send people to when the inline player fails
///
/// TikTok watch pages need the author handle, which the reference does not
/// keep, so TikTok (and non-videos) fall back to the saved URL.
pub fn watch_url(reference: &VideoReference, saved_url: &str) -> String {
    match reference.platform {
        Some(Platform::YouTube) => format!("{}{}", YOUTUBE_WATCH, reference.external_id),
        Some(Platform::Vimeo) => format!("{}{}", VIMEO_WATCH, reference.external_id),
        Some(Platform::TikTok) | None => saved_url.to_string(),
    }
}
