use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// None of these are fatal to the session and none are retried automatically;
/// the client repeats the action if it wants to.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No lead selected")]
    NoLeadSelected,

    #[error("Speech recognition is not supported on this host")]
    UnsupportedCapability,

    #[error("Dictation error: {0}")]
    HostReportedError(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("The model returned no content")]
    EmptyGeneration,

    #[error("No OpenAI API key configured")]
    ApiKeyMissing,

    #[error("A generation is already in progress")]
    GenerationInProgress,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NoLeadSelected => (
                StatusCode::BAD_REQUEST,
                "NO_LEAD_SELECTED",
                "Please select a lead first".to_string(),
            ),
            AppError::UnsupportedCapability => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNSUPPORTED_CAPABILITY",
                "Speech recognition is not supported in this browser".to_string(),
            ),
            AppError::HostReportedError(reason) => {
                tracing::warn!("Dictation stopped by host: {reason}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "DICTATION_ERROR",
                    format!("Speech recognition error: {reason}"),
                )
            }
            AppError::Database(msg) => {
                tracing::error!("Database error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "DATABASE_ERROR",
                    format!("Failed to fetch leads: {msg}"),
                )
            }
            AppError::GenerationFailed(msg) => {
                tracing::error!("Generation error: {msg}");
                (StatusCode::BAD_GATEWAY, "GENERATION_FAILED", msg.clone())
            }
            AppError::EmptyGeneration => {
                tracing::error!("Generation returned empty content");
                (
                    StatusCode::BAD_GATEWAY,
                    "EMPTY_GENERATION",
                    "No content was generated".to_string(),
                )
            }
            AppError::ApiKeyMissing => (
                StatusCode::BAD_REQUEST,
                "API_KEY_MISSING",
                "Add your OpenAI API key in settings".to_string(),
            ),
            AppError::GenerationInProgress => (
                StatusCode::CONFLICT,
                "GENERATION_IN_PROGRESS",
                "A generation is already running".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NoLeadSelected.parts().0, StatusCode::BAD_REQUEST);
        assert_eq!(AppError::GenerationInProgress.parts().0, StatusCode::CONFLICT);
        assert_eq!(
            AppError::Database("down".into()).parts().0,
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_database_error_carries_upstream_message() {
        let (_, code, message) = AppError::Database("relation does not exist".into()).parts();
        assert_eq!(code, "DATABASE_ERROR");
        assert_eq!(message, "Failed to fetch leads: relation does not exist");
    }

    #[test]
    fn test_generation_failed_passes_message_through() {
        let (_, code, message) =
            AppError::GenerationFailed("Incorrect API key provided".into()).parts();
        assert_eq!(code, "GENERATION_FAILED");
        assert_eq!(message, "Incorrect API key provided");
    }
}
