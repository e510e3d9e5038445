//! Thumbnail grid with its empty and not-found states.

use leptos::prelude::*;

use crate::components::thumbnail_card::ThumbnailCard;
use crate::dispatch::AppState;

/// Grid of thumbnail cards for the active board.
#[component]
pub fn ThumbnailGrid() -> impl IntoView {
    let app = expect_context::<AppState>();

    view! {
        <div class="thumbnail-grid">
            {move || {
                let view = app.view.get();
                if view.board_missing {
                    return view! {
                        <EmptyState
                            primary="This board could not be found or has been deleted."
                            secondary=None
                        />
                    }
                        .into_any();
                }
                match view.active {
                    Some(board) if !board.thumbnails.is_empty() => board
                        .thumbnails
                        .into_iter()
                        .map(|t| view! { <ThumbnailCard thumbnail=t/> })
                        .collect_view()
                        .into_any(),
                    Some(_) => {
                        let secondary = if view.shared_view {
                            "This board is empty."
                        } else {
                            "Add a YouTube video URL to get started"
                        };
                        view! {
                            <EmptyState
                                primary="No thumbnails added yet"
                                secondary=Some(secondary)
                            />
                        }
                            .into_any()
                    }
                    None => {
                        let secondary = (!view.shared_view)
                            .then_some("Select or create a board to get started.");
                        view! {
                            <EmptyState primary="No board selected." secondary=secondary/>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn EmptyState(primary: &'static str, secondary: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>{primary}</p>
            {secondary.map(|text| view! { <p class="empty-state__hint">{text}</p> })}
        </div>
    }
}
