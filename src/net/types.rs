//! Wire types for the board and thumbnail REST resources.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A board summary as returned by `GET /api/boards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub id: String,
    pub name: String,
}

/// A fully materialized board as returned by `GET /api/boards/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
}

/// A single video-preview entry belonging to one board.
///
/// The store assigns integer thumbnail ids but the client treats every id as
/// an opaque string, so ids are normalized on deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub board_id: String,
    pub video_url: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Accept a JSON string or integer and normalize it to `String`.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(i64),
    }
    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}
