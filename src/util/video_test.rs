use super::*;

// =============================================================
// hostname
// =============================================================

#[test]
fn hostname_of_a_short_link() {
    assert_eq!(hostname("https://youtu.be/abc123"), "youtu.be");
}

#[test]
fn hostname_ignores_path_and_query() {
    assert_eq!(
        hostname("https://www.youtube.com/watch?v=abc123&t=10"),
        "www.youtube.com"
    );
}

#[test]
fn unparseable_url_falls_back_to_the_raw_string() {
    assert_eq!(hostname("not a url"), "not a url");
}

// =============================================================
// caption
// =============================================================

#[test]
fn caption_prefers_the_title() {
    assert_eq!(
        caption(Some("A Trailer"), "https://youtu.be/abc123"),
        "A Trailer"
    );
}

#[test]
fn caption_without_a_title_uses_the_hostname() {
    assert_eq!(caption(None, "https://youtu.be/abc123"), "youtu.be");
}

#[test]
fn empty_title_counts_as_missing() {
    assert_eq!(caption(Some(""), "https://youtu.be/abc123"), "youtu.be");
}
