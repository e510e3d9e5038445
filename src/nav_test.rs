use super::*;

// =============================================================
// shared_board_id
// =============================================================

#[test]
fn two_segment_board_path_yields_the_id() {
    assert_eq!(shared_board_id("/board/abc-123"), Some("abc-123"));
}

#[test]
fn root_path_is_not_a_board() {
    assert_eq!(shared_board_id("/"), None);
}

#[test]
fn board_path_without_an_id_is_rejected() {
    assert_eq!(shared_board_id("/board/"), None);
    assert_eq!(shared_board_id("/board"), None);
}

#[test]
fn extra_segments_are_rejected() {
    assert_eq!(shared_board_id("/board/abc/def"), None);
}

#[test]
fn other_prefixes_are_rejected() {
    assert_eq!(shared_board_id("/boards/abc"), None);
    assert_eq!(shared_board_id("board/abc"), None);
}

// =============================================================
// Link formatting
// =============================================================

#[test]
fn board_path_round_trips_through_the_parser() {
    let path = board_path("b-1");
    assert_eq!(shared_board_id(&path), Some("b-1"));
}

#[test]
fn share_link_joins_origin_and_board_path() {
    assert_eq!(
        share_link("https://example.com", "b-1"),
        "https://example.com/board/b-1"
    );
}
