//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `view` holds the session's board data, `ui`
//! holds modal and form state, `toast` holds the transient notification.
//! All mutation flows go through the `actions` reducer, which returns
//! side-effect intents instead of performing I/O, and `visibility` derives
//! mode-gated control flags from the view state in one place.

pub mod actions;
pub mod toast;
pub mod ui;
pub mod view;
pub mod visibility;
