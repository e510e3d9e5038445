//! Navigation binder mapping between the browser URL and the active board.
//!
//! Board switches push `/board/{id}` onto the history without reloading.
//! Back/forward navigation is deliberately not observed: there is no
//! `popstate` handling, so navigating back does not resynchronize the view.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Extract the board id from a path of the exact shape `/board/{id}`.
pub fn shared_board_id(path: &str) -> Option<&str> {
    let rest = path.strip_prefix("/board/")?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    Some(rest)
}

/// In-app path for a board.
pub fn board_path(id: &str) -> String {
    format!("/board/{id}")
}

/// Shareable absolute link for a board.
pub fn share_link(origin: &str, id: &str) -> String {
    format!("{origin}/board/{id}")
}

/// The page origin, e.g. `https://example.com`.
pub fn origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Whether the current URL points at a board.
pub fn on_board_path() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .is_some_and(|p| shared_board_id(&p).is_some())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Push `/board/{id}` onto the history without reloading.
pub fn push_board_url(id: &str) {
    push(&board_path(id));
}

/// Reset the URL to the root path without reloading.
pub fn reset_to_root() {
    push("/");
}

fn push(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
