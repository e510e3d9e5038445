//! Modal dialog for renaming or deleting a board.

use leptos::prelude::*;

use crate::dispatch::{AppState, dispatch};
use crate::net::types::BoardSummary;
use crate::state::actions::Action;
use crate::util;

/// Edit-board dialog for the given sidebar entry.
///
/// Deletion asks for confirmation before anything is dispatched; the dialog
/// stays open when deletion fails so the user can retry.
#[component]
pub fn EditBoardModal(board: BoardSummary) -> impl IntoView {
    let app = expect_context::<AppState>();
    let name = RwSignal::new(board.name.clone());

    let submit = {
        let id = board.id.clone();
        move || {
            dispatch(
                app,
                Action::RenameBoard {
                    id: id.clone(),
                    name: name.get_untracked(),
                },
            );
        }
    };
    let delete = {
        let id = board.id.clone();
        move |_| {
            if util::browser::confirm(
                "Are you sure you want to delete this board and all its thumbnails? This cannot be undone.",
            ) {
                dispatch(app, Action::DeleteBoard(id.clone()));
            }
        }
    };
    let close = move |_| dispatch(app, Action::CloseModals);

    let on_key = {
        let submit = submit.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                submit();
            }
        }
    };
    let on_save = {
        let submit = submit.clone();
        move |_| submit()
    };

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h2 class="modal__title">"Edit Board"</h2>
                <label class="modal__label">
                    "Board Name"
                    <input
                        class="modal__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                        }
                        on:keydown=on_key
                    />
                </label>
                <div class="modal__actions">
                    <button class="btn btn--danger" on:click=delete>
                        "Delete Board"
                    </button>
                    <button class="btn" on:click=move |_| dispatch(app, Action::CloseModals)>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=on_save>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
