//! Themed watchlist generation with optional genre and platform filters.

use crate::flows::prompts::{FLOW_SYSTEM, WATCHLIST_PROMPT_TEMPLATE};
use crate::flows::{optional_line, with_output_contract, Flow};
use crate::schema::inputs::WatchlistInput;
use crate::schema::movie::{MovieShape, WatchlistEnvelope};

pub struct WatchlistFlow;

impl Flow for WatchlistFlow {
    const NAME: &'static str = "watchlist";
    const SYSTEM: &'static str = FLOW_SYSTEM;
    const OUTPUT: MovieShape = MovieShape {
        year_required: true,
        platform_key: "streamingAvailability",
    };

    type Input = WatchlistInput;
    type Output = WatchlistEnvelope;

    fn render_prompt(input: &WatchlistInput) -> String {
        let body = WATCHLIST_PROMPT_TEMPLATE
            .replace("{mood}", input.mood.trim())
            .replace(
                "{genre_line}",
                &optional_line("The genre should be", input.genre.as_deref()),
            )
            .replace(
                "{platform_line}",
                &optional_line(
                    "The movies should be available on",
                    input.streaming_platform.as_deref(),
                ),
            );
        with_output_contract::<Self::Output>(body, &Self::OUTPUT)
    }
}
