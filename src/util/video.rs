//! Caption helpers for thumbnail cards.

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;

use url::Url;

/// Hostname of a video URL, or the raw string when it does not parse.
pub fn hostname(video_url: &str) -> String {
    Url::parse(video_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| video_url.to_owned())
}

/// Card caption: the thumbnail's title, falling back to the source hostname.
pub fn caption(title: Option<&str>, video_url: &str) -> String {
    match title {
        Some(t) if !t.is_empty() => t.to_owned(),
        _ => hostname(video_url),
    }
}
