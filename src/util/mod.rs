//! Small helpers: browser primitives and video URL handling.

pub mod browser;
pub mod video;
