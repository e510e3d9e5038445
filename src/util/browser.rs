//! Browser primitives used by event wiring.
//!
//! Client-side (hydrate): real `web-sys` calls. Server-side (SSR): inert
//! stubs so the crate compiles and tests without a browser.

/// Ask the user to confirm a destructive action.
///
/// Returns `false` outside the browser, so destructive flows never proceed
/// during server rendering.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Copy text to the system clipboard via the async Clipboard API.
///
/// Fire and forget: the returned promise is dropped, matching the
/// optimistic "Link copied" toast shown by the caller.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
