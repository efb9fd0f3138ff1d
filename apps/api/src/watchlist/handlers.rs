//! Axum route handlers for the watchlist stores.

use std::convert::Infallible;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    Json,
};
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Movie, NamedWatchlist};
use crate::schema::{require_text, Schema, ValidationError};
use crate::state::AppState;
use crate::watchlist::{notifications, share_as_text, AddOutcome, Notification};

#[derive(Deserialize)]
pub struct ClientQuery {
    pub client_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct AddMovieResponse {
    pub outcome: AddOutcome,
    pub count: usize,
}

/// Body for saving or sharing a watchlist.
#[derive(Debug, Deserialize)]
pub struct WatchlistBody {
    pub title: String,
    pub movies: Vec<Movie>,
}

impl Schema for WatchlistBody {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        for (i, movie) in self.movies.iter().enumerate() {
            movie
                .validate()
                .map_err(|e| e.under(&format!("movies[{i}]")))?;
        }
        Ok(())
    }
}

/// GET /api/v1/watchlist
pub async fn handle_get_watchlist(
    State(state): State<AppState>,
    Query(params): Query<ClientQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state
        .watchlists
        .movies(params.client_id)
        .await
        .map_err(AppError::load)?;
    Ok(Json(movies))
}

/// POST /api/v1/watchlist/movies
pub async fn handle_add_movie(
    State(state): State<AppState>,
    Query(params): Query<ClientQuery>,
    Json(body): Json<Value>,
) -> Result<Json<AddMovieResponse>, AppError> {
    let movie = Movie::from_value(&body)?;
    let (outcome, count) = state
        .watchlists
        .add_movie(params.client_id, movie)
        .await
        .map_err(AppError::save)?;
    Ok(Json(AddMovieResponse { outcome, count }))
}

/// DELETE /api/v1/watchlist
pub async fn handle_clear_watchlist(
    State(state): State<AppState>,
    Query(params): Query<ClientQuery>,
) -> Result<StatusCode, AppError> {
    state
        .watchlists
        .clear_all(params.client_id)
        .await
        .map_err(AppError::clear)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/watchlists
pub async fn handle_get_named(
    State(state): State<AppState>,
    Query(params): Query<ClientQuery>,
) -> Result<Json<Vec<NamedWatchlist>>, AppError> {
    let saved = state
        .watchlists
        .named(params.client_id)
        .await
        .map_err(AppError::load)?;
    Ok(Json(saved))
}

/// POST /api/v1/watchlists
pub async fn handle_save_named(
    State(state): State<AppState>,
    Query(params): Query<ClientQuery>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<NamedWatchlist>), AppError> {
    let body = WatchlistBody::from_value(&body)?;
    let saved = state
        .watchlists
        .save_named(params.client_id, &body.title, body.movies)
        .await
        .map_err(AppError::save)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// POST /api/v1/watchlists/share
pub async fn handle_share(Json(body): Json<Value>) -> Result<impl IntoResponse, AppError> {
    let body = WatchlistBody::from_value(&body)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        share_as_text(&body.title, &body.movies),
    ))
}

/// GET /api/v1/watchlist/events
///
/// Streams this client's watchlist changes as `added`, `cleared` and `saved`
/// events. A `resync` event means some changes were dropped and the view
/// should re-read everything.
pub async fn handle_events(
    State(state): State<AppState>,
    Query(params): Query<ClientQuery>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let events = notifications(state.watchlists.subscribe(), params.client_id)
        .map(|notification| Ok::<_, Infallible>(to_sse_event(notification)));
    Sse::new(events).keep_alive(KeepAlive::default())
}

fn to_sse_event(notification: Notification) -> Event {
    match notification {
        Notification::Change(event) => Event::default()
            .event(event.change.name())
            .json_data(&event)
            .unwrap_or_else(|_| Event::default().event("resync")),
        Notification::Resync { skipped } => Event::default()
            .event("resync")
            .data(skipped.to_string()),
    }
}
