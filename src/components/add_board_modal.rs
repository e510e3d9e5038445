//! Modal dialog for creating a new board.

use leptos::prelude::*;

use crate::dispatch::{AppState, dispatch};
use crate::state::actions::Action;

/// Create-board dialog. Mounted fresh on every open, so the name input
/// always starts empty.
#[component]
pub fn AddBoardModal() -> impl IntoView {
    let app = expect_context::<AppState>();
    let name = RwSignal::new(String::new());

    let submit = move || {
        dispatch(
            app,
            Action::CreateBoard {
                name: name.get_untracked(),
                initial: false,
            },
        );
    };
    let close = move |_| dispatch(app, Action::CloseModals);

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h2 class="modal__title">"Create Board"</h2>
                <label class="modal__label">
                    "Board Name"
                    <input
                        class="modal__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    />
                </label>
                <div class="modal__actions">
                    <button class="btn" on:click=move |_| dispatch(app, Action::CloseModals)>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit()>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
