//! REST API client for the board and thumbnail endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Network`] since these
//! endpoints are only reachable from the browser.
//!
//! Every mutating call is a single request; no batching, no retry, no
//! timeout. Failures are typed as [`ApiError`] and handled at the call site.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{Board, BoardSummary, Thumbnail};

#[cfg(feature = "hydrate")]
use super::error::error_from_parts;
#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, Response};

/// Turn a non-2xx response into an [`ApiError`].
#[cfg(feature = "hydrate")]
async fn fail(resp: Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_from_parts(status, &body)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

/// Fetch the board summary list from `GET /api/boards`.
pub async fn fetch_boards() -> Result<Vec<BoardSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = Request::get("/api/boards")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<Vec<BoardSummary>>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Fetch one fully materialized board from `GET /api/boards/{id}`.
///
/// A 404 maps to [`ApiError::NotFound`] so callers can distinguish a deleted
/// board from other failures.
pub async fn fetch_board(id: &str) -> Result<Board, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/boards/{id}");
        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.status() == 404 {
            return Err(ApiError::NotFound);
        }
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<Board>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        unavailable()
    }
}

/// Create a board via `POST /api/boards`.
pub async fn create_board(name: &str) -> Result<BoardSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = Request::post("/api/boards")
            .json(&serde_json::json!({ "name": name }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<BoardSummary>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        unavailable()
    }
}

/// Rename a board via `PUT /api/boards/{id}`.
pub async fn update_board(id: &str, name: &str) -> Result<BoardSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/boards/{id}");
        let resp = Request::put(&url)
            .json(&serde_json::json!({ "name": name }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<BoardSummary>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, name);
        unavailable()
    }
}

/// Delete a board (and its thumbnails) via `DELETE /api/boards/{id}`.
pub async fn delete_board(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/boards/{id}");
        let resp = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        unavailable()
    }
}

/// Add a thumbnail via `POST /api/boards/{id}/thumbnails`.
pub async fn create_thumbnail(board_id: &str, video_url: &str) -> Result<Thumbnail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/boards/{board_id}/thumbnails");
        let resp = Request::post(&url)
            .json(&serde_json::json!({ "video_url": video_url }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<Thumbnail>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (board_id, video_url);
        unavailable()
    }
}

/// Remove a thumbnail via `DELETE /api/boards/{id}/thumbnails/{thumbId}`.
pub async fn delete_thumbnail(board_id: &str, thumbnail_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/boards/{board_id}/thumbnails/{thumbnail_id}");
        let resp = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (board_id, thumbnail_id);
        unavailable()
    }
}
