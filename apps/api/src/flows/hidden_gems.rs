//! Hidden gems and international films for a taste profile.

use crate::flows::prompts::{FLOW_SYSTEM, HIDDEN_GEMS_PROMPT_TEMPLATE, NOT_SPECIFIED};
use crate::flows::{with_output_contract, Flow};
use crate::schema::inputs::HiddenGemsInput;
use crate::schema::movie::{MovieShape, RecommendationsEnvelope};

pub struct HiddenGemsFlow;

impl Flow for HiddenGemsFlow {
    const NAME: &'static str = "hidden_gems";
    const SYSTEM: &'static str = FLOW_SYSTEM;
    const OUTPUT: MovieShape = MovieShape {
        year_required: true,
        platform_key: "streamingPlatform",
    };

    type Input = HiddenGemsInput;
    type Output = RecommendationsEnvelope;

    fn render_prompt(input: &HiddenGemsInput) -> String {
        let or_unspecified = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(NOT_SPECIFIED)
                .to_string()
        };

        let body = HIDDEN_GEMS_PROMPT_TEMPLATE
            .replace("{favorite_movies}", input.favorite_movies.trim())
            .replace("{favorite_genres}", input.favorite_genres.trim())
            .replace("{favorite_directors}", &or_unspecified(&input.favorite_directors))
            .replace("{favorite_actors}", &or_unspecified(&input.favorite_actors));
        with_output_contract::<Self::Output>(body, &Self::OUTPUT)
    }
}
