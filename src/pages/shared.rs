//! Shared-view page mounted at `/board/{id}`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::board_screen::BoardScreen;
use crate::dispatch::{AppState, dispatch};
use crate::state::actions::Action;

/// Read-only view of one board, reached via a share link.
///
/// Fetches only that board; the board-list endpoint is never called here.
/// A 404 renders the not-found state in place.
#[component]
pub fn SharedBoardPage() -> impl IntoView {
    let app = expect_context::<AppState>();
    let params = use_params_map();

    Effect::new(move || {
        if let Some(id) = params.read().get("id") {
            dispatch(app, Action::BootShared(id));
        }
    });

    view! { <BoardScreen/> }
}
