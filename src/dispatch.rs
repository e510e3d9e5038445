//! Event wiring: applies actions through the reducer and executes the
//! returned side-effect intents.
//!
//! Components call [`dispatch`] with an [`Action`]; network intents resolve
//! asynchronously and feed their results back in as completion actions.
//! Failures are logged to the console and surfaced as toasts by the reducer;
//! nothing here retries or blocks the UI.

use leptos::prelude::*;

use crate::state::actions::{self, Action, Effect};
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::state::view::ViewState;

/// The application's reactive state, provided once via context at the root.
#[derive(Clone, Copy)]
pub struct AppState {
    pub view: RwSignal<ViewState>,
    pub ui: RwSignal<UiState>,
    pub toast: RwSignal<ToastState>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewState::default()),
            ui: RwSignal::new(UiState::default()),
            toast: RwSignal::new(ToastState::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply an action and run its side effects.
pub fn dispatch(app: AppState, action: Action) {
    let effects = app
        .view
        .try_update(|view| {
            app.ui
                .try_update(|ui| actions::apply(view, ui, action))
                .unwrap_or_default()
        })
        .unwrap_or_default();

    for effect in effects {
        run_effect(app, effect);
    }
}

/// Show a toast and schedule its auto-dismiss.
pub fn show_toast(app: AppState, message: impl Into<String>, success: bool) {
    let seq = app
        .toast
        .try_update(|t| t.show(message.into(), success))
        .unwrap_or_default();
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::toast::DISMISS_MS).await;
            app.toast.try_update(|t| t.dismiss(seq));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = seq;
    }
}

#[allow(clippy::too_many_lines)]
fn run_effect(app: AppState, effect: Effect) {
    match effect {
        Effect::Toast { message, success } => show_toast(app, message, success),

        Effect::PushBoardUrl(id) => crate::nav::push_board_url(&id),

        Effect::ResetUrl => crate::nav::reset_to_root(),

        Effect::ResetUrlIfOnBoardPath => {
            if crate::nav::on_board_path() {
                crate::nav::reset_to_root();
            }
        }

        Effect::FetchBoards => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_boards().await;
                if let Err(err) = &result {
                    log::error!("failed to fetch boards: {err}");
                }
                dispatch(app, Action::BoardsFetched(result));
            });
        }

        Effect::FetchBoard(id) => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_board(&id).await;
                if let Err(err) = &result {
                    log::error!("failed to fetch board {id}: {err}");
                }
                dispatch(app, Action::BoardFetched(result));
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = id;
        }

        Effect::CreateBoard { name } => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_board(&name).await;
                if let Err(err) = &result {
                    log::error!("failed to create board: {err}");
                }
                dispatch(app, Action::BoardCreated(result));
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = name;
        }

        Effect::UpdateBoard { id, name } => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let result = crate::net::api::update_board(&id, &name).await;
                if let Err(err) = &result {
                    log::error!("failed to update board {id}: {err}");
                }
                dispatch(app, Action::BoardRenamed(result));
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (id, name);
        }

        Effect::DeleteBoard(id) => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_board(&id).await;
                if let Err(err) = &result {
                    log::error!("failed to delete board {id}: {err}");
                }
                dispatch(app, Action::BoardDeleted(result));
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = id;
        }

        Effect::CreateThumbnail { board_id, video_url } => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_thumbnail(&board_id, &video_url).await;
                if let Err(err) = &result {
                    log::error!("failed to add thumbnail to board {board_id}: {err}");
                }
                dispatch(app, Action::ThumbnailAdded(result));
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (board_id, video_url);
        }

        Effect::DeleteThumbnail { board_id, thumbnail_id } => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_thumbnail(&board_id, &thumbnail_id).await;
                if let Err(err) = &result {
                    log::error!("failed to delete thumbnail {thumbnail_id}: {err}");
                }
                dispatch(app, Action::ThumbnailRemoved(result));
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (board_id, thumbnail_id);
        }
    }
}
