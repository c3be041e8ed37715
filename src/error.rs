//! Request-level error handling.
//!
//! Handlers return [`AppError`]; every failure serializes as
//! `{"error": message}` with a status that reflects where the fault lies:
//! 400 for bad requests, 502 for collaborator failures, 500 for local
//! faults like a failed image write.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::images::ImageError;
use crate::stt::TranscriptionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Transcription(#[from] TranscriptionError),

    #[error(transparent)]
    Image(#[from] ImageError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Transcription(TranscriptionError::InvalidUrl { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Transcription(_) => StatusCode::BAD_GATEWAY,
            Self::Image(ImageError::Write(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Image(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        assert_eq!(
            AppError::BadRequest("missing field".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_collaborator_failure_maps_to_502() {
        let err = AppError::from(TranscriptionError::Request("connection refused".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_bad_upload_maps_to_400() {
        let err = AppError::from(ImageError::Decode("not an image".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_write_failure_maps_to_500() {
        let err = AppError::from(ImageError::Write("disk full".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
