use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::schema::ValidationError;
use crate::watchlist::StorageError;

/// What the watchlist route was doing when storage failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageAction {
    Load,
    Save,
    Clear,
}

impl StorageAction {
    fn user_message(self) -> &'static str {
        match self {
            StorageAction::Load => "Could not load your watchlist. Please try again.",
            StorageAction::Save => "Could not save to your watchlist. Please try again.",
            StorageAction::Clear => "Could not clear your watchlist. Please try again.",
        }
    }
}

/// Error type for the watchlist routes.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The action routes never produce this: they answer with an envelope instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error ({action:?}): {source}")]
    Storage {
        action: StorageAction,
        #[source]
        source: StorageError,
    },
}

impl AppError {
    pub fn load(source: StorageError) -> Self {
        AppError::Storage {
            action: StorageAction::Load,
            source,
        }
    }

    pub fn save(source: StorageError) -> Self {
        AppError::Storage {
            action: StorageAction::Save,
            source,
        }
    }

    pub fn clear(source: StorageError) -> Self {
        AppError::Storage {
            action: StorageAction::Clear,
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                e.to_string(),
            ),
            AppError::Storage { action, source } => {
                tracing::error!(?action, "Storage error: {source}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORAGE_ERROR",
                    action.user_message().to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
