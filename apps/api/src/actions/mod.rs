//! Request Action Layer: the only surface the forms talk to.
//!
//! Each action turns raw form fields into a flow payload, runs exactly one
//! flow, and answers with an [`ActionResponse`] envelope. Nothing escapes as
//! an error: failures are logged here and replaced with a fixed user message.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::error;

use crate::flows::{self, Flow, FlowError};
use crate::llm_client::TextGenerator;
use crate::models::Movie;

pub mod handlers;

/// Filter value meaning "apply no filter for this field".
pub const ANY_SENTINEL: &str = "any";

/// `{ success: true, data }` or `{ success: false, error }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActionResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Normalizes an optional filter: missing, blank, or `"any"` (any case) become `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ANY_SENTINEL))
        .map(String::from)
}

/// Raw `key=value` pairs from a submitted form.
#[derive(Debug, Clone, Default)]
pub struct FormFields(HashMap<String, String>);

impl From<HashMap<String, String>> for FormFields {
    fn from(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }
}

impl FormFields {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Builds a flow payload. `text` fields are copied as-is (blank → absent),
    /// `filters` go through [`normalize_optional`]. Absent keys are left out of
    /// the payload entirely rather than set to `null`.
    pub fn payload(&self, text: &[&str], filters: &[&str]) -> Map<String, Value> {
        let mut payload = Map::new();
        for key in text {
            if let Some(value) = self.get(key).filter(|v| !v.trim().is_empty()) {
                payload.insert((*key).to_string(), Value::String(value.to_string()));
            }
        }
        for key in filters {
            if let Some(value) = normalize_optional(self.get(key)) {
                payload.insert((*key).to_string(), Value::String(value));
            }
        }
        payload
    }
}

/// Renders the four-line taste profile the general flow expects.
pub fn taste_profile(fields: &FormFields) -> String {
    [
        ("Favorite Movies", "favoriteMovies"),
        ("Favorite Genres", "favoriteGenres"),
        ("Favorite Directors", "favoriteDirectors"),
        ("Favorite Actors", "favoriteActors"),
    ]
    .iter()
    .map(|(label, key)| format!("{label}: {}", fields.get(key).unwrap_or("").trim()))
    .collect::<Vec<_>>()
    .join("\n")
}

pub const RECOMMENDATIONS_ERROR: &str = "Failed to get recommendations. Please try again.";
pub const MOOD_ERROR: &str = "Failed to get movies for this mood. Please try again.";
pub const HIDDEN_GEMS_ERROR: &str = "Failed to discover hidden gems. Please try again.";
pub const WATCHLIST_ERROR: &str = "Failed to generate AI watchlist. Please try again.";

/// Taste-profile recommendations. `default_count` applies when the form has no count.
pub async fn get_recommendations(
    generator: &dyn TextGenerator,
    fields: &FormFields,
    default_count: u32,
) -> ActionResponse<Vec<Movie>> {
    let mut payload = fields.payload(&[], &["mood", "platform"]);
    payload.insert(
        "tasteProfile".to_string(),
        Value::String(taste_profile(fields)),
    );
    payload.insert("count".to_string(), count_value(fields, default_count));

    run_action::<flows::RecommendationsFlow>(generator, payload, RECOMMENDATIONS_ERROR).await
}

pub async fn get_mood_movies(
    generator: &dyn TextGenerator,
    fields: &FormFields,
) -> ActionResponse<Vec<Movie>> {
    let payload = fields.payload(&["mood"], &["genre"]);
    run_action::<flows::MoodFlow>(generator, payload, MOOD_ERROR).await
}

pub async fn get_hidden_gems(
    generator: &dyn TextGenerator,
    fields: &FormFields,
) -> ActionResponse<Vec<Movie>> {
    let payload = fields.payload(
        &[
            "favoriteMovies",
            "favoriteGenres",
            "favoriteDirectors",
            "favoriteActors",
        ],
        &[],
    );
    run_action::<flows::HiddenGemsFlow>(generator, payload, HIDDEN_GEMS_ERROR).await
}

pub async fn get_ai_watchlist(
    generator: &dyn TextGenerator,
    fields: &FormFields,
) -> ActionResponse<Vec<Movie>> {
    let payload = fields.payload(&["mood"], &["genre", "streamingPlatform"]);
    run_action::<flows::WatchlistFlow>(generator, payload, WATCHLIST_ERROR).await
}

/// A numeric form count stays numeric; anything else is forwarded as a
/// string so the schema rejects it by name.
fn count_value(fields: &FormFields, default_count: u32) -> Value {
    match fields.get("count").map(str::trim).filter(|c| !c.is_empty()) {
        None => Value::from(default_count),
        Some(raw) => raw
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(raw.to_string())),
    }
}

async fn run_action<F: Flow>(
    generator: &dyn TextGenerator,
    payload: Map<String, Value>,
    user_message: &str,
) -> ActionResponse<Vec<Movie>> {
    match flows::run::<F>(generator, &Value::Object(payload)).await {
        Ok(movies) => ActionResponse::ok(movies),
        Err(e) => {
            log_flow_error(F::NAME, &e);
            ActionResponse::failed(user_message)
        }
    }
}

fn log_flow_error(flow: &str, e: &FlowError) {
    match e.validation() {
        Some(v) => error!(flow, field = %v.field, reason = %v.reason, "Flow failed validation: {e}"),
        None => error!(flow, "Flow failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::ScriptedGenerator;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
            .into()
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(Some("any")), None);
        assert_eq!(normalize_optional(Some("Any")), None);
        assert_eq!(normalize_optional(Some("  ")), None);
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("Netflix")), Some("Netflix".to_string()));
        assert_eq!(normalize_optional(Some("Anything")), Some("Anything".to_string()));
    }

    #[test]
    fn test_payload_omits_any_sentinel_keys() {
        let fields = form(&[("mood", "Rainy Night"), ("genre", "any"), ("streamingPlatform", "Max")]);
        let payload = fields.payload(&["mood"], &["genre", "streamingPlatform"]);
        assert!(!payload.contains_key("genre"));
        assert_eq!(payload["streamingPlatform"], "Max");
        assert_eq!(payload["mood"], "Rainy Night");
    }

    #[test]
    fn test_taste_profile_block() {
        let fields = form(&[("favoriteMovies", "Inception"), ("favoriteGenres", "Sci-Fi")]);
        let profile = taste_profile(&fields);
        assert!(profile.contains("Favorite Movies: Inception"));
        assert!(profile.contains("Favorite Genres: Sci-Fi"));
        assert!(profile.contains("Favorite Actors: "));
    }

    #[test]
    fn test_count_value() {
        assert_eq!(count_value(&form(&[]), 6), Value::from(6));
        assert_eq!(count_value(&form(&[("count", "4")]), 6), Value::from(4));
        assert_eq!(count_value(&form(&[("count", "lots")]), 6), Value::from("lots"));
    }

    #[tokio::test]
    async fn test_any_filters_are_absent_downstream() {
        let generator = ScriptedGenerator::replying(
            r#"[{"title": "Interstellar", "year": 2014, "description": "Space."}]"#,
        );
        let fields = form(&[
            ("favoriteMovies", "Inception"),
            ("favoriteGenres", "Sci-Fi"),
            ("mood", "any"),
            ("platform", "any"),
        ]);

        let response = get_recommendations(&generator, &fields, 6).await;

        assert!(response.success);
        assert_eq!(response.data.unwrap().len(), 1);
        let prompt = generator.last_prompt();
        assert!(!prompt.contains("Mood:"));
        assert!(!prompt.contains("Platform:"));
        assert!(!prompt.contains(": any"));
    }

    #[tokio::test]
    async fn test_failures_become_error_envelope() {
        let generator = ScriptedGenerator::failing(500);
        let response = get_ai_watchlist(&generator, &form(&[("mood", "Date Night")])).await;
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.error.as_deref(), Some(WATCHLIST_ERROR));
    }

    #[tokio::test]
    async fn test_invalid_input_becomes_error_envelope() {
        let generator = ScriptedGenerator::replying("[]");
        let response = get_hidden_gems(&generator, &form(&[("favoriteMovies", "Oldboy")])).await;
        assert_eq!(response, ActionResponse::failed(HIDDEN_GEMS_ERROR));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_bad_count_is_rejected() {
        let generator = ScriptedGenerator::replying("[]");
        let response = get_recommendations(
            &generator,
            &form(&[("favoriteMovies", "Heat"), ("count", "lots")]),
            6,
        )
        .await;
        assert!(!response.success);
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_mood_action_serves_curated_list() {
        let generator = ScriptedGenerator::failing(500);
        let response = get_mood_movies(&generator, &form(&[("mood", "Thrilling")])).await;
        assert!(response.success);
        assert_eq!(response.data.unwrap().len(), 12);
    }

    #[test]
    fn test_envelope_serialization() {
        let ok = serde_json::to_value(ActionResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": [1, 2]}));

        let failed = serde_json::to_value(ActionResponse::<Vec<u8>>::failed("nope")).unwrap();
        assert_eq!(failed, serde_json::json!({"success": false, "error": "nope"}));
    }
}
