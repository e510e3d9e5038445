#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::net::types::{Board, BoardSummary};

/// Session-wide view state: the board summary list, the active board, and
/// the view mode.
///
/// `shared_view` is decided once, by which route mounts at page load, and is
/// never flipped afterwards. A mode switch requires a full navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Lightweight summaries for the sidebar (normal mode only).
    pub boards: Vec<BoardSummary>,
    /// The one fully materialized board, if any.
    pub active: Option<Board>,
    /// True when the page was loaded via a `/board/{id}` share link.
    pub shared_view: bool,
    /// True when a shared board's detail fetch returned 404.
    pub board_missing: bool,
}

impl ViewState {
    /// Id of the active board, if one is materialized.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|b| b.id.as_str())
    }

    /// Whether the given board id is the active one.
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }
}
