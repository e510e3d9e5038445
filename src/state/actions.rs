//! The dispatch table: every user gesture and every request completion is an
//! [`Action`], applied to the state by [`apply`], which returns the
//! side-effect intents ([`Effect`]) to run.
//!
//! `apply` performs no I/O, so mutation guards (shared-view rejection,
//! empty-input validation) are unit-testable by asserting that no network
//! intent is emitted.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use super::ui::UiState;
use super::view::ViewState;
use crate::net::error::ApiError;
use crate::net::types::{Board, BoardSummary, Thumbnail};

/// Name given to the board auto-created on first visit to an empty store.
pub const DEFAULT_BOARD_NAME: &str = "My First Board";

/// A user gesture or request completion.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Page loaded at `/`.
    BootNormal,
    /// Page loaded at `/board/{id}`.
    BootShared(String),
    BoardsFetched(Result<Vec<BoardSummary>, ApiError>),
    BoardFetched(Result<Board, ApiError>),
    SelectBoard(String),
    CreateBoard { name: String, initial: bool },
    BoardCreated(Result<BoardSummary, ApiError>),
    RenameBoard { id: String, name: String },
    BoardRenamed(Result<BoardSummary, ApiError>),
    /// Confirmation prompt already accepted by the time this is dispatched.
    DeleteBoard(String),
    BoardDeleted(Result<(), ApiError>),
    AddThumbnail(String),
    ThumbnailAdded(Result<Thumbnail, ApiError>),
    /// Confirmation prompt already accepted by the time this is dispatched.
    RemoveThumbnail { board_id: String, thumbnail_id: String },
    ThumbnailRemoved(Result<(), ApiError>),
    OpenAddBoard,
    OpenEditBoard(BoardSummary),
    OpenShare,
    CloseModals,
    SetThumbnailUrl(String),
}

/// A side-effect intent returned by [`apply`] and executed by the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    FetchBoards,
    FetchBoard(String),
    CreateBoard { name: String },
    UpdateBoard { id: String, name: String },
    DeleteBoard(String),
    CreateThumbnail { board_id: String, video_url: String },
    DeleteThumbnail { board_id: String, thumbnail_id: String },
    /// Push `/board/{id}` onto the history without reloading.
    PushBoardUrl(String),
    /// Reset the URL to the root path.
    ResetUrl,
    /// Reset the URL to the root path only if it currently points at a board.
    ResetUrlIfOnBoardPath,
    Toast { message: String, success: bool },
}

fn toast(message: impl Into<String>, success: bool) -> Effect {
    Effect::Toast {
        message: message.into(),
        success,
    }
}

/// Apply one action to the state, returning the side effects to run.
#[allow(clippy::too_many_lines)]
pub fn apply(view: &mut ViewState, ui: &mut UiState, action: Action) -> Vec<Effect> {
    match action {
        Action::BootNormal => vec![Effect::FetchBoards],

        Action::BootShared(id) => {
            view.shared_view = true;
            view.active = None;
            view.board_missing = false;
            vec![Effect::FetchBoard(id)]
        }

        Action::BoardsFetched(Ok(boards)) => {
            view.boards = boards;
            if view.boards.is_empty() {
                return vec![Effect::CreateBoard {
                    name: DEFAULT_BOARD_NAME.to_owned(),
                }];
            }
            // Keep the already-active board's detail fresh, otherwise
            // materialize the first board in the list.
            let target = view
                .active_id()
                .unwrap_or(view.boards[0].id.as_str())
                .to_owned();
            vec![Effect::FetchBoard(target)]
        }

        Action::BoardsFetched(Err(_)) => {
            vec![toast("Failed to load boards. Please try again.", false)]
        }

        Action::BoardFetched(Ok(board)) => {
            view.active = Some(board);
            view.board_missing = false;
            Vec::new()
        }

        Action::BoardFetched(Err(ApiError::NotFound)) => {
            let mut effects = vec![toast("Board not found. It might have been deleted.", false)];
            view.active = None;
            if view.shared_view {
                // Render the not-found state in place.
                view.board_missing = true;
            } else {
                // Fall back to the root view.
                effects.push(Effect::ResetUrl);
                effects.push(Effect::FetchBoards);
            }
            effects
        }

        Action::BoardFetched(Err(_)) => {
            vec![toast("Failed to load thumbnails. Please try again.", false)]
        }

        Action::SelectBoard(id) => {
            if view.shared_view || view.is_active(&id) {
                return Vec::new();
            }
            vec![Effect::PushBoardUrl(id.clone()), Effect::FetchBoard(id)]
        }

        Action::CreateBoard { name, initial } => {
            let name = name.trim();
            if name.is_empty() {
                if initial {
                    return Vec::new();
                }
                return vec![toast("Board name cannot be empty.", false)];
            }
            if view.shared_view {
                return vec![toast("Cannot create boards in shared view.", false)];
            }
            vec![Effect::CreateBoard {
                name: name.to_owned(),
            }]
        }

        Action::BoardCreated(Ok(created)) => {
            ui.add_board_open = false;
            view.active = Some(Board {
                id: created.id,
                name: created.name,
                thumbnails: Vec::new(),
            });
            vec![
                toast("New board created!", true),
                Effect::ResetUrlIfOnBoardPath,
                Effect::FetchBoards,
            ]
        }

        Action::BoardCreated(Err(err)) => {
            vec![toast(format!("Failed to create board: {err}"), false)]
        }

        Action::RenameBoard { id, name } => {
            let name = name.trim();
            if name.is_empty() {
                return vec![toast("Board name cannot be empty.", false)];
            }
            if view.shared_view {
                return vec![toast("Cannot update boards in shared view.", false)];
            }
            vec![Effect::UpdateBoard {
                id,
                name: name.to_owned(),
            }]
        }

        Action::BoardRenamed(Ok(updated)) => {
            if let Some(active) = view.active.as_mut() {
                if active.id == updated.id {
                    active.name = updated.name;
                }
            }
            ui.edit_board = None;
            vec![toast("Board name updated!", true), Effect::FetchBoards]
        }

        Action::BoardRenamed(Err(err)) => {
            ui.edit_board = None;
            vec![toast(format!("Failed to update board: {err}"), false)]
        }

        Action::DeleteBoard(id) => {
            if view.shared_view {
                return vec![toast("Cannot delete boards in shared view.", false)];
            }
            vec![Effect::DeleteBoard(id)]
        }

        Action::BoardDeleted(Ok(())) => {
            ui.edit_board = None;
            view.active = None;
            vec![
                toast("Board deleted successfully!", true),
                Effect::ResetUrl,
                Effect::FetchBoards,
            ]
        }

        // The edit modal stays open so the user can retry.
        Action::BoardDeleted(Err(err)) => {
            vec![toast(format!("Failed to delete board: {err}"), false)]
        }

        Action::AddThumbnail(url) => {
            let url = url.trim();
            if url.is_empty() {
                return vec![toast("Please enter a YouTube video URL.", false)];
            }
            let Some(board_id) = view.active_id().map(ToOwned::to_owned) else {
                return vec![toast("Please select a board first.", false)];
            };
            if view.shared_view {
                return vec![toast("Cannot add thumbnails in shared view.", false)];
            }
            vec![Effect::CreateThumbnail {
                board_id,
                video_url: url.to_owned(),
            }]
        }

        Action::ThumbnailAdded(Ok(_)) => {
            ui.thumbnail_url.clear();
            let mut effects = vec![toast("Thumbnail added successfully!", true)];
            if let Some(id) = view.active_id() {
                effects.push(Effect::FetchBoard(id.to_owned()));
            }
            effects
        }

        Action::ThumbnailAdded(Err(err)) => {
            vec![toast(format!("Failed to add thumbnail: {err}"), false)]
        }

        Action::RemoveThumbnail { board_id, thumbnail_id } => {
            if view.shared_view {
                return vec![toast("Cannot delete thumbnails in shared view.", false)];
            }
            vec![Effect::DeleteThumbnail {
                board_id,
                thumbnail_id,
            }]
        }

        Action::ThumbnailRemoved(Ok(())) => {
            let mut effects = vec![toast("Thumbnail deleted successfully!", true)];
            if let Some(id) = view.active_id() {
                effects.push(Effect::FetchBoard(id.to_owned()));
            }
            effects
        }

        Action::ThumbnailRemoved(Err(err)) => {
            vec![toast(format!("Failed to delete thumbnail: {err}"), false)]
        }

        Action::OpenAddBoard => {
            ui.add_board_open = true;
            Vec::new()
        }

        Action::OpenEditBoard(board) => {
            ui.edit_board = Some(board);
            Vec::new()
        }

        Action::OpenShare => {
            if view.active.is_none() {
                return vec![toast("No board selected to share.", false)];
            }
            ui.share_open = true;
            Vec::new()
        }

        Action::CloseModals => {
            ui.close_modals();
            Vec::new()
        }

        Action::SetThumbnailUrl(text) => {
            ui.thumbnail_url = text;
            Vec::new()
        }
    }
}
