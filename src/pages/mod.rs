//! Route-level pages. Which page mounts decides the view mode for the whole
//! page lifetime.

pub mod home;
pub mod shared;
