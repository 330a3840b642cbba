//! YouTube URL handling: video id extraction and embed URL construction

use std::sync::OnceLock;

use regex::Regex;

/// Recognized URL shapes, tried in order.
const VIDEO_ID_PATTERNS: [&str; 5] = [
    r"youtube\.com/embed/([^/?#&]+)",
    r"youtube\.com/watch\?v=([^/?#&]+)",
    r"youtu\.be/([^/?#&]+)",
    r"youtube\.com/v/([^/?#&]+)",
    r"youtube\.com/shorts/([^/?#&]+)",
];

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

static VIDEO_ID_REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();

fn video_id_regexes() -> &'static [Regex] {
    VIDEO_ID_REGEXES.get_or_init(|| {
        VIDEO_ID_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("invalid video id pattern"))
            .collect()
    })
}

/// Extract the video id from a YouTube URL.
///
/// Returns `None` for an empty string without logging. Any other string that
/// yields no id is logged as a warning; callers render a placeholder.
pub fn resolve_video_id(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    for regex in video_id_regexes() {
        if let Some(id) = regex.captures(url).and_then(|caps| caps.get(1)) {
            return Some(id.as_str().to_string());
        }
    }

    if url.contains("/embed/") {
        let last_segment = url.rsplit('/').next().unwrap_or_default();
        let id = last_segment.split('?').next().unwrap_or_default();
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }

    tracing::warn!(url, "Could not extract YouTube video id from URL");
    None
}

/// Embeddable player URL for a resolved video id.
pub fn video_embed_url(video_id: &str, autoplay: bool) -> String {
    format!(
        "{EMBED_BASE}{video_id}?autoplay={}&fs=0&rel=0",
        u8::from(autoplay)
    )
}

/// Source for the game frame; started games ask the host page to autoplay.
pub fn game_embed_src(game_url: &str, started: bool) -> String {
    if started {
        format!("{game_url}?autoplay=1")
    } else {
        game_url.to_string()
    }
}
