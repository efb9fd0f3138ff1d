use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::movie::Movie;

/// A titled, timestamped snapshot of movies saved under `cine-genie-watchlists`.
/// Titles are not unique: saving twice under one title keeps both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedWatchlist {
    pub id: Uuid,
    pub title: String,
    pub movies: Vec<Movie>,
    pub created_at: DateTime<Utc>,
}

impl NamedWatchlist {
    pub fn new(title: impl Into<String>, movies: Vec<Movie>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            movies,
            created_at: Utc::now(),
        }
    }
}
