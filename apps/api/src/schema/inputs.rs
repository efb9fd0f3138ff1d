//! Input schemas, one per flow. Payload keys are camelCase to match the form
//! field names the actions forward.

use serde::Deserialize;

use crate::schema::{check_range, require_text, Schema, ValidationError};

/// Used when a recommendation payload has no `count`.
pub const DEFAULT_COUNT: u32 = 3;
pub const MAX_COUNT: u32 = 20;

fn default_count() -> u32 {
    DEFAULT_COUNT
}

/// General recommendations from a free-text taste profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationInput {
    pub taste_profile: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default = "default_count")]
    pub count: u32,
}

impl Schema for RecommendationInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("tasteProfile", &self.taste_profile)?;
        check_range("count", Some(self.count), 1..=MAX_COUNT)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoodInput {
    pub mood: String,
    #[serde(default)]
    pub genre: Option<String>,
}

impl Schema for MoodInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("mood", &self.mood)
    }
}

/// Taste profile for hidden-gem discovery. Movies and genres are mandatory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenGemsInput {
    pub favorite_movies: String,
    pub favorite_genres: String,
    #[serde(default)]
    pub favorite_directors: Option<String>,
    #[serde(default)]
    pub favorite_actors: Option<String>,
}

impl Schema for HiddenGemsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("favoriteMovies", &self.favorite_movies)?;
        require_text("favoriteGenres", &self.favorite_genres)
    }
}

/// Themed watchlist generation ("Rainy Night", "Date Night", ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistInput {
    pub mood: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub streaming_platform: Option<String>,
}

impl Schema for WatchlistInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("mood", &self.mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recommendation_count_defaults() {
        let input = RecommendationInput::from_value(&json!({"tasteProfile": "Sci-Fi"})).unwrap();
        assert_eq!(input.count, DEFAULT_COUNT);
        assert!(input.mood.is_none());
    }

    #[test]
    fn test_recommendation_count_out_of_range() {
        for count in [json!(0), json!(21), json!(-1), json!("lots")] {
            let err = RecommendationInput::from_value(
                &json!({"tasteProfile": "Sci-Fi", "count": count}),
            )
            .unwrap_err();
            assert_eq!(err.field, "count");
        }
    }

    #[test]
    fn test_recommendation_requires_profile() {
        let err = RecommendationInput::from_value(&json!({"tasteProfile": "   "})).unwrap_err();
        assert_eq!(err.field, "tasteProfile");
    }

    #[test]
    fn test_mood_requires_mood() {
        let err = MoodInput::from_value(&json!({"genre": "comedy"})).unwrap_err();
        assert_eq!(err.field, "mood");
    }

    #[test]
    fn test_hidden_gems_optional_people() {
        let input = HiddenGemsInput::from_value(&json!({
            "favoriteMovies": "Oldboy",
            "favoriteGenres": "Thriller",
            "favoriteActors": null
        }))
        .unwrap();
        assert!(input.favorite_directors.is_none());
        assert!(input.favorite_actors.is_none());
    }

    #[test]
    fn test_hidden_gems_requires_genres() {
        let err = HiddenGemsInput::from_value(&json!({"favoriteMovies": "Oldboy"})).unwrap_err();
        assert_eq!(err.field, "favoriteGenres");
    }

    #[test]
    fn test_watchlist_input() {
        let input = WatchlistInput::from_value(&json!({
            "mood": "Rainy Night",
            "streamingPlatform": "Netflix"
        }))
        .unwrap();
        assert_eq!(input.streaming_platform.as_deref(), Some("Netflix"));
        assert!(input.genre.is_none());
    }
}
