#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use super::view::ViewState;

/// Mode-gated control visibility, derived in one place per render.
///
/// Hiding controls is only half of the shared-view enforcement: the reducer
/// independently rejects mutating actions in shared mode, so a hidden control
/// invoked programmatically still never reaches the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    /// Sidebar with the board list and its layout reservation.
    pub sidebar: bool,
    /// The create-board affordance.
    pub add_board: bool,
    /// The share-link button.
    pub share: bool,
    /// The add-thumbnail URL form.
    pub thumbnail_form: bool,
    /// Per-thumbnail delete affordances.
    pub thumbnail_delete: bool,
    /// Per-board rename/delete affordances.
    pub board_edit: bool,
}

impl Visibility {
    /// Derive the visibility flags for the current view state.
    pub fn of(view: &ViewState) -> Self {
        let interactive = !view.shared_view;
        Self {
            sidebar: interactive,
            add_board: interactive,
            share: interactive,
            thumbnail_form: interactive,
            thumbnail_delete: interactive,
            board_edit: interactive,
        }
    }
}
