//! Recommendation flows.
//!
//! A flow is one pipeline: validate input → render prompt → call the model →
//! validate output. The four variants differ only in their input schema,
//! prompt framing and output shape; [`run`] drives all of them. There is no
//! retry here and no partial result: any invalid movie fails the call.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::llm_client::prompts::{OUTPUT_CONTRACT_INSTRUCTION, REAL_TITLES_INSTRUCTION};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::Movie;
use crate::schema::movie::{MovieList, MovieShape};
use crate::schema::{Schema, ValidationError};

pub mod curated;
pub mod hidden_gems;
pub mod mood;
pub mod prompts;
pub mod recommendations;
pub mod watchlist;

pub use hidden_gems::HiddenGemsFlow;
pub use mood::MoodFlow;
pub use recommendations::RecommendationsFlow;
pub use watchlist::WatchlistFlow;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("invalid input: {0}")]
    InvalidInput(ValidationError),

    #[error("model output failed validation: {0}")]
    InvalidOutput(ValidationError),

    #[error("generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("model returned malformed JSON: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

impl FlowError {
    /// The schema violation behind this failure, if any.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            FlowError::InvalidInput(e) | FlowError::InvalidOutput(e) => Some(e),
            _ => None,
        }
    }
}

/// One recommendation use case.
pub trait Flow {
    const NAME: &'static str;
    const SYSTEM: &'static str;
    const OUTPUT: MovieShape;

    type Input: Schema + std::fmt::Debug;
    /// Envelope the model is asked to wrap its movies in.
    type Output: MovieList;

    fn render_prompt(input: &Self::Input) -> String;

    /// Fixed results that bypass generation. Checked before the model is called.
    fn curated(_input: &Self::Input) -> Option<Vec<Movie>> {
        None
    }
}

/// Runs flow `F` over an untyped payload.
pub async fn run<F: Flow>(
    generator: &dyn TextGenerator,
    payload: &Value,
) -> Result<Vec<Movie>, FlowError> {
    let input = F::Input::from_value(payload).map_err(FlowError::InvalidInput)?;

    if let Some(movies) = F::curated(&input) {
        info!(flow = F::NAME, count = movies.len(), "Serving curated results");
        return Ok(movies);
    }

    let prompt = F::render_prompt(&input);
    debug!(flow = F::NAME, ?input, "Calling generator");

    let text = generator.generate(&prompt, F::SYSTEM).await?;
    let value: Value = serde_json::from_str(&text)?;
    let movies = F::OUTPUT
        .parse::<F::Output>(&value)
        .map_err(FlowError::InvalidOutput)?;

    info!(flow = F::NAME, count = movies.len(), "Flow completed");
    Ok(movies)
}

/// Appends the shared output contract and the flow's schema to a prompt body.
pub(crate) fn with_output_contract<L: MovieList>(
    body: String,
    shape: &MovieShape,
) -> String {
    format!(
        "{body}\n\n{}\n{}\n\nOUTPUT SCHEMA:\n{}",
        REAL_TITLES_INSTRUCTION,
        OUTPUT_CONTRACT_INSTRUCTION,
        shape.describe::<L>()
    )
}

/// Renders `label: value` followed by a newline, or nothing when absent.
pub(crate) fn optional_line(label: &str, value: Option<&str>) -> String {
    value
        .map(|v| format!("{label}: {v}\n"))
        .unwrap_or_default()
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedGenerator;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_invalid_input_never_reaches_generator() {
        let generator = ScriptedGenerator::replying("[]");
        let err = run::<RecommendationsFlow>(&generator, &json!({"mood": "Funny"}))
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::InvalidInput(_)));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_generation_failure() {
        let generator = ScriptedGenerator::replying("Sure! Here are some movies:");
        let err = run::<RecommendationsFlow>(&generator, &json!({"tasteProfile": "Noir"}))
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::MalformedOutput(_)));
    }

    #[tokio::test]
    async fn test_generator_error_propagates() {
        let generator = ScriptedGenerator::failing(503);
        let err = run::<RecommendationsFlow>(&generator, &json!({"tasteProfile": "Noir"}))
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::Generation(LlmError::Api { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_missing_description_is_output_validation_error() {
        let generator =
            ScriptedGenerator::replying(r#"[{"title": "Chinatown", "year": 1974}]"#);
        let err = run::<RecommendationsFlow>(&generator, &json!({"tasteProfile": "Noir"}))
            .await
            .unwrap_err();
        match err {
            FlowError::InvalidOutput(validation) => {
                assert_eq!(validation.field, "[0].description")
            }
            other => panic!("expected output validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_optional_line() {
        assert_eq!(optional_line("Mood", Some("Funny")), "Mood: Funny\n");
        assert_eq!(optional_line("Mood", None), "");
    }
}
