//! Axum route handlers for the Request Action Layer.
//!
//! All four answer 200 with an envelope, even when the flow failed.

use std::collections::HashMap;

use axum::{extract::State, Form, Json};

use crate::actions::{self, ActionResponse, FormFields};
use crate::models::Movie;
use crate::state::AppState;

type MoviesEnvelope = Json<ActionResponse<Vec<Movie>>>;

/// POST /api/v1/actions/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> MoviesEnvelope {
    let fields = FormFields::from(fields);
    Json(
        actions::get_recommendations(
            state.generator.as_ref(),
            &fields,
            state.config.recommendation_count,
        )
        .await,
    )
}

/// POST /api/v1/actions/mood
pub async fn handle_mood(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> MoviesEnvelope {
    Json(actions::get_mood_movies(state.generator.as_ref(), &FormFields::from(fields)).await)
}

/// POST /api/v1/actions/hidden-gems
pub async fn handle_hidden_gems(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> MoviesEnvelope {
    Json(actions::get_hidden_gems(state.generator.as_ref(), &FormFields::from(fields)).await)
}

/// POST /api/v1/actions/watchlist
pub async fn handle_ai_watchlist(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> MoviesEnvelope {
    Json(actions::get_ai_watchlist(state.generator.as_ref(), &FormFields::from(fields)).await)
}
