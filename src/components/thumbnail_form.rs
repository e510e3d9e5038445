//! Add-thumbnail form: a URL input and a submit button.

use leptos::prelude::*;

use crate::dispatch::{AppState, dispatch};
use crate::state::actions::Action;

/// URL entry form for adding a thumbnail to the active board.
#[component]
pub fn ThumbnailForm() -> impl IntoView {
    let app = expect_context::<AppState>();

    let url = move || app.ui.get().thumbnail_url;
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let url = app.ui.get_untracked().thumbnail_url;
        dispatch(app, Action::AddThumbnail(url));
    };

    view! {
        <form class="thumbnail-form" on:submit=submit>
            <input
                class="thumbnail-form__input"
                type="text"
                placeholder="Paste a YouTube video URL"
                prop:value=url
                on:input=move |ev| {
                    dispatch(app, Action::SetThumbnailUrl(event_target_value(&ev)));
                }
            />
            <button class="btn btn--primary" type="submit">
                "Add Thumbnail"
            </button>
        </form>
    }
}
