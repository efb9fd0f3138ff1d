//! Mood-based suggestions.
//!
//! Lookup order is fixed: the curated table in [`crate::flows::curated`] is
//! consulted first and, on a hit, the model is never called. Every other mood
//! goes through generation.

use crate::flows::curated::curated_for_mood;
use crate::flows::prompts::{FLOW_SYSTEM, MOOD_PROMPT_TEMPLATE};
use crate::flows::{optional_line, with_output_contract, Flow};
use crate::models::Movie;
use crate::schema::inputs::MoodInput;
use crate::schema::movie::{MovieShape, MoviesEnvelope};

pub struct MoodFlow;

impl Flow for MoodFlow {
    const NAME: &'static str = "mood";
    const SYSTEM: &'static str = FLOW_SYSTEM;
    const OUTPUT: MovieShape = MovieShape {
        year_required: true,
        platform_key: "streamingPlatform",
    };

    type Input = MoodInput;
    type Output = MoviesEnvelope;

    fn render_prompt(input: &MoodInput) -> String {
        let body = MOOD_PROMPT_TEMPLATE
            .replace("{mood}", input.mood.trim())
            .replace(
                "{genre_line}",
                &optional_line("The genre should be", input.genre.as_deref()),
            );
        with_output_contract::<Self::Output>(body, &Self::OUTPUT)
    }

    fn curated(input: &MoodInput) -> Option<Vec<Movie>> {
        curated_for_mood(&input.mood)
    }
}
