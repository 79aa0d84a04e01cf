use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Generation failed: {0}")]
    GenerationError(String),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Every validation rule in this workspace is a presence/non-empty
            // check, so field errors always name missing fields.
            AppError::ValidationError(errors) => {
                let mut missing_fields: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect();
                missing_fields.sort_unstable();

                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Missing required fields",
                        "missingFields": missing_fields,
                    })),
                )
                    .into_response()
            }
            AppError::GenerationError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": message,
                })),
            )
                .into_response(),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": "Internal server error",
                })),
            )
                .into_response(),
            AppError::ConfigError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": "Configuration error",
                })),
            )
                .into_response(),
        }
    }
}
