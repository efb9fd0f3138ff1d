pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::actions::handlers as actions;
use crate::catalog;
use crate::state::AppState;
use crate::watchlist::handlers as watchlist;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/catalog", get(catalog::handle_catalog))
        // Recommendation actions (form posts, always 200 with an envelope)
        .route(
            "/api/v1/actions/recommendations",
            post(actions::handle_recommendations),
        )
        .route("/api/v1/actions/mood", post(actions::handle_mood))
        .route(
            "/api/v1/actions/hidden-gems",
            post(actions::handle_hidden_gems),
        )
        .route(
            "/api/v1/actions/watchlist",
            post(actions::handle_ai_watchlist),
        )
        // Watchlist stores
        .route(
            "/api/v1/watchlist",
            get(watchlist::handle_get_watchlist).delete(watchlist::handle_clear_watchlist),
        )
        .route("/api/v1/watchlist/movies", post(watchlist::handle_add_movie))
        .route("/api/v1/watchlist/events", get(watchlist::handle_events))
        .route(
            "/api/v1/watchlists",
            get(watchlist::handle_get_named).post(watchlist::handle_save_named),
        )
        .route("/api/v1/watchlists/share", post(watchlist::handle_share))
        .with_state(state)
}
