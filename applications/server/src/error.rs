/// Server error types
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chainstream_core::ChainError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Rejected input, with a hint of what is missing
    #[error("{message}: {details}")]
    Validation { message: String, details: String },

    #[error("Catalog error: {0}")]
    Catalog(#[from] ChainError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ServerError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, message, Some(details))
            }
            ServerError::Catalog(err) => catalog_response(err),
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                    None,
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = match details {
            Some(details) => json!({ "message": message, "details": details }),
            None => json!({ "message": message }),
        };

        (status, Json(body)).into_response()
    }
}

fn catalog_response(err: ChainError) -> (StatusCode, String, Option<String>) {
    match err {
        ChainError::TrackNotFound(_) => (StatusCode::NOT_FOUND, "Track not found".to_string(), None),
        ChainError::ArtistNotFound(_) => {
            (StatusCode::NOT_FOUND, "Artist not found".to_string(), None)
        }
        ChainError::PlaylistNotFound(_) => {
            (StatusCode::NOT_FOUND, "Playlist not found".to_string(), None)
        }
        ChainError::UserNotFound(_) => (StatusCode::NOT_FOUND, "User not found".to_string(), None),
        ChainError::InvalidAmount(_)
        | ChainError::InvalidAddress(_)
        | ChainError::InvalidInput(_) => (StatusCode::BAD_REQUEST, err.to_string(), None),
        ChainError::Storage(_) | ChainError::Serialization(_) => {
            tracing::error!("Catalog error: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                None,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_catalog_errors_map_to_404() {
        let response = ServerError::from(ChainError::ArtistNotFound(9)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_amount_maps_to_400() {
        let response = ServerError::from(ChainError::InvalidAmount(-1.0)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failures_are_masked() {
        let response = ServerError::from(ChainError::storage("lock poisoned")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
