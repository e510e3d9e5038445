//! Network layer: REST API client, wire types, and the failure taxonomy.

pub mod api;
pub mod error;
pub mod types;
