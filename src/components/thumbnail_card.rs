//! One card in the thumbnail grid.

use leptos::prelude::*;

use crate::dispatch::{AppState, dispatch};
use crate::net::types::Thumbnail;
use crate::state::actions::Action;
use crate::state::visibility::Visibility;
use crate::util;

/// Fallback image substituted when the remote preview fails to load.
pub const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/640x360/1f1f1f/666666?text=Invalid+Image";

/// A thumbnail card: preview image, caption, and a delete affordance in
/// normal mode.
#[component]
pub fn ThumbnailCard(thumbnail: Thumbnail) -> impl IntoView {
    let app = expect_context::<AppState>();
    let vis = move || Visibility::of(&app.view.read());

    let image_failed = RwSignal::new(false);
    let src = {
        let original = thumbnail.thumbnail_url.clone();
        move || {
            if image_failed.get() {
                PLACEHOLDER_IMAGE.to_owned()
            } else {
                original.clone()
            }
        }
    };
    let alt = thumbnail
        .title
        .clone()
        .unwrap_or_else(|| "Thumbnail".to_owned());
    let caption = util::video::caption(thumbnail.title.as_deref(), &thumbnail.video_url);

    let remove = {
        let board_id = thumbnail.board_id.clone();
        let thumbnail_id = thumbnail.id.clone();
        move |_| {
            if util::browser::confirm("Are you sure you want to delete this thumbnail?") {
                dispatch(
                    app,
                    Action::RemoveThumbnail {
                        board_id: board_id.clone(),
                        thumbnail_id: thumbnail_id.clone(),
                    },
                );
            }
        }
    };

    view! {
        <div class="thumbnail-card">
            <div class="thumbnail-card__preview">
                <img
                    class="thumbnail-card__img"
                    src=src
                    alt=alt
                    on:error=move |_| image_failed.set(true)
                />
                <Show when=move || vis().thumbnail_delete>
                    <button
                        class="thumbnail-card__delete"
                        title="Delete thumbnail"
                        on:click=remove.clone()
                    >
                        "\u{2715}"
                    </button>
                </Show>
            </div>
            <div class="thumbnail-card__caption">{caption}</div>
        </div>
    }
}
