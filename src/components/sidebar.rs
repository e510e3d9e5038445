//! Sidebar listing board summaries with select and edit actions.

use leptos::prelude::*;

use crate::dispatch::{AppState, dispatch};
use crate::net::types::BoardSummary;
use crate::state::actions::Action;
use crate::state::visibility::Visibility;

/// Board list sidebar, rendered in normal mode only.
///
/// Highlights the active board's row; an empty store shows a single
/// non-interactive placeholder row.
#[component]
pub fn Sidebar() -> impl IntoView {
    let app = expect_context::<AppState>();

    let boards = move || app.view.get().boards;
    let no_boards = move || {
        let view = app.view.get();
        view.boards.is_empty() && view.active.is_none()
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__header">
                <h2 class="sidebar__title">"Boards"</h2>
                <button
                    class="btn btn--primary sidebar__add"
                    on:click=move |_| dispatch(app, Action::OpenAddBoard)
                >
                    "+ Add Board"
                </button>
            </div>
            <ul class="sidebar__list">
                <Show when=no_boards>
                    <li class="sidebar__item sidebar__item--active">
                        <span class="sidebar__item-name">"No Boards Yet"</span>
                    </li>
                </Show>
                {move || {
                    boards()
                        .into_iter()
                        .map(|b| view! { <BoardRow board=b/> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </aside>
    }
}

/// One row in the sidebar: select on the name, edit on the pencil.
#[component]
fn BoardRow(board: BoardSummary) -> impl IntoView {
    let app = expect_context::<AppState>();
    let vis = move || Visibility::of(&app.view.read());

    let active = {
        let id = board.id.clone();
        move || app.view.read().is_active(&id)
    };
    let select = {
        let id = board.id.clone();
        move |_| dispatch(app, Action::SelectBoard(id.clone()))
    };
    let edit = {
        let board = board.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            dispatch(app, Action::OpenEditBoard(board.clone()));
        }
    };

    view! {
        <li class="sidebar__item" class:sidebar__item--active=active>
            <span class="sidebar__item-name" on:click=select>
                {board.name.clone()}
            </span>
            <Show when=move || vis().board_edit>
                <button class="sidebar__edit" title="Edit board name" on:click=edit.clone()>
                    "\u{270E}"
                </button>
            </Show>
        </li>
    }
}
