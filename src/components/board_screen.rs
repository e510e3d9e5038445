//! The board screen shared by the normal and shared views.

use leptos::prelude::*;

use crate::components::add_board_modal::AddBoardModal;
use crate::components::edit_board_modal::EditBoardModal;
use crate::components::share_modal::ShareModal;
use crate::components::sidebar::Sidebar;
use crate::components::thumbnail_form::ThumbnailForm;
use crate::components::thumbnail_grid::ThumbnailGrid;
use crate::components::toast::Toast;
use crate::dispatch::{AppState, dispatch};
use crate::state::actions::Action;
use crate::state::visibility::Visibility;

/// Sidebar, title, form, grid, modals, and toast, all driven by one
/// visibility derivation per render. Both routes render this screen; only
/// the bootstrap action differs.
#[component]
pub fn BoardScreen() -> impl IntoView {
    let app = expect_context::<AppState>();
    let vis = move || Visibility::of(&app.view.read());

    let title = move || {
        let view = app.view.get();
        if view.board_missing {
            "Board Not Found".to_owned()
        } else {
            view.active
                .map_or_else(|| "No Board Selected".to_owned(), |b| b.name)
        }
    };

    view! {
        <div class="board-screen" class:board-screen--shared=move || !vis().sidebar>
            <Show when=move || vis().sidebar>
                <Sidebar/>
            </Show>
            <main class="board-screen__main">
                <header class="board-screen__header">
                    <h1 class="board-screen__title">{title}</h1>
                    <Show when=move || vis().share>
                        <button class="btn" on:click=move |_| dispatch(app, Action::OpenShare)>
                            "Share Board"
                        </button>
                    </Show>
                </header>
                <Show when=move || vis().thumbnail_form>
                    <ThumbnailForm/>
                </Show>
                <ThumbnailGrid/>
            </main>

            <Show when=move || app.ui.get().add_board_open>
                <AddBoardModal/>
            </Show>
            {move || {
                app.ui
                    .get()
                    .edit_board
                    .map(|b| view! { <EditBoardModal board=b/> })
            }}
            <Show when=move || app.ui.get().share_open>
                <ShareModal/>
            </Show>
            <Toast/>
        </div>
    }
}
