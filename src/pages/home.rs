//! Normal-view page mounted at `/`.

use leptos::prelude::*;

use crate::components::board_screen::BoardScreen;
use crate::dispatch::{AppState, dispatch};
use crate::state::actions::Action;

/// Interactive board manager.
///
/// Bootstraps by fetching the board list; an empty store gets a default
/// board created for it. In-app board switches push `/board/{id}` onto the
/// history without remounting this page, so the view stays interactive.
#[component]
pub fn HomePage() -> impl IntoView {
    let app = expect_context::<AppState>();

    // Bootstrap once on mount; nothing reactive is read here.
    Effect::new(move || {
        dispatch(app, Action::BootNormal);
    });

    view! { <BoardScreen/> }
}
