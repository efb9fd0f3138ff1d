//! General recommendations from a taste profile, with optional mood and platform.

use crate::flows::prompts::{FLOW_SYSTEM, RECOMMENDATIONS_PROMPT_TEMPLATE};
use crate::flows::{optional_line, with_output_contract, Flow};
use crate::models::Movie;
use crate::schema::inputs::RecommendationInput;
use crate::schema::movie::MovieShape;

pub struct RecommendationsFlow;

impl Flow for RecommendationsFlow {
    const NAME: &'static str = "recommendations";
    const SYSTEM: &'static str = FLOW_SYSTEM;
    const OUTPUT: MovieShape = MovieShape {
        year_required: false,
        platform_key: "platform",
    };

    type Input = RecommendationInput;
    type Output = Vec<Movie>;

    fn render_prompt(input: &RecommendationInput) -> String {
        let body = RECOMMENDATIONS_PROMPT_TEMPLATE
            .replace("{taste_profile}", input.taste_profile.trim())
            .replace("{mood_line}", &optional_line("Mood", input.mood.as_deref()))
            .replace(
                "{platform_line}",
                &optional_line("Platform", input.platform.as_deref()),
            )
            .replace("{count}", &input.count.to_string());
        with_output_contract::<Self::Output>(body, &Self::OUTPUT)
    }
}
