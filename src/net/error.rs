//! Failure taxonomy for API calls.
//!
//! Every non-2xx response is parsed for a JSON `{"error": "..."}` payload;
//! the `error` field becomes an [`ApiError::Api`] message, falling back to
//! a generic [`ApiError::Http`] when the body is not usable JSON.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed API call, as surfaced to toasts and the reducer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or completed.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response without a usable error body.
    #[error("HTTP status {0}")]
    Http(u16),
    /// Non-2xx response with a parsed `error` field.
    #[error("{0}")]
    Api(String),
    /// 404 on a board detail fetch.
    #[error("board not found")]
    NotFound,
    /// Client-side precondition failed before any request was made.
    #[error("{0}")]
    Validation(String),
}

/// Build an [`ApiError`] from a response status and raw body text.
pub fn error_from_parts(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("error")
            .and_then(|e| e.as_str())
            .map_or(ApiError::Http(status), |msg| ApiError::Api(msg.to_owned())),
        Err(_) => ApiError::Http(status),
    }
}
