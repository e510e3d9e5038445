#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::BoardSummary;

/// Modal and form state for the normal-mode chrome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the create-board modal is open.
    pub add_board_open: bool,
    /// Board being edited in the rename/delete modal, if any.
    pub edit_board: Option<BoardSummary>,
    /// Whether the share-link modal is open.
    pub share_open: bool,
    /// Contents of the add-thumbnail URL input.
    pub thumbnail_url: String,
}

impl UiState {
    /// Close every open modal.
    pub fn close_modals(&mut self) {
        self.add_board_open = false;
        self.edit_board = None;
        self.share_open = false;
    }
}
