use serde::{Deserialize, Serialize};

/// A single movie as returned by a recommendation flow or a static fixture.
///
/// `platform` is read from whichever streaming key the producing flow used
/// (`platform`, `streamingPlatform` or `streamingAvailability`) and is always
/// written back as `platform`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// 0.0 – 10.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<f64>,
    #[serde(
        default,
        alias = "streamingPlatform",
        alias = "streamingAvailability",
        skip_serializing_if = "Option::is_none"
    )]
    pub platform: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            imdb_rating: None,
            platform: None,
            description: description.into(),
            image_url: None,
            trailer_url: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.imdb_rating = Some(rating);
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }
}
