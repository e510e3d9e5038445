//! # thumbboard
//!
//! Leptos + WASM client for organizing video thumbnails into named boards.
//! Talks to the board/thumbnail REST API and renders a sidebar-and-grid UI,
//! with a read-only shared view reachable via a direct `/board/{id}` link.
//!
//! This crate contains pages, components, application state, the dispatch
//! layer, and the REST client. State transitions live in a pure reducer
//! (`state::actions`) so mutation guards and refresh flows are testable
//! without a browser or network.

pub mod app;
pub mod components;
pub mod dispatch;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
