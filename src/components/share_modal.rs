//! Modal dialog presenting the shareable board link.

use leptos::prelude::*;

use crate::dispatch::{AppState, dispatch, show_toast};
use crate::nav;
use crate::state::actions::Action;
use crate::util;

/// Share dialog showing `{origin}/board/{id}` for the active board.
#[component]
pub fn ShareModal() -> impl IntoView {
    let app = expect_context::<AppState>();

    let link = move || {
        app.view
            .read()
            .active_id()
            .map(|id| nav::share_link(&nav::origin(), id))
            .unwrap_or_default()
    };
    let copy = move |_| {
        util::browser::copy_to_clipboard(&link());
        show_toast(app, "Link copied to clipboard!", true);
    };
    let close = move |_| dispatch(app, Action::CloseModals);

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h2 class="modal__title">"Share Board"</h2>
                <p class="modal__hint">"Anyone with this link can view the board."</p>
                <div class="modal__share-row">
                    <input class="modal__input" type="text" readonly prop:value=link/>
                    <button class="btn btn--primary" on:click=copy>
                        "Copy"
                    </button>
                </div>
                <div class="modal__actions">
                    <button class="btn" on:click=move |_| dispatch(app, Action::CloseModals)>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
