//! Transient toast notification.

use leptos::prelude::*;

use crate::dispatch::AppState;

/// Toast shown after every mutation round trip; auto-dismissed by the
/// dispatcher's timer.
#[component]
pub fn Toast() -> impl IntoView {
    let app = expect_context::<AppState>();

    let toast = move || app.toast.get();

    view! {
        <div
            class="toast"
            class:toast--visible=move || toast().visible
            class:toast--error=move || !toast().success
        >
            <span class="toast__icon">
                {move || if toast().success { "\u{2713}" } else { "\u{26A0}" }}
            </span>
            <span class="toast__message">{move || toast().message}</span>
        </div>
    }
}
