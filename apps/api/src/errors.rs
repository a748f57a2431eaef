use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::interview::stage::Stage;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is recoverable: the session is left in the stage it was in
/// before the failing interaction.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resume contains no extractable text")]
    EmptyDocument,

    #[error("Resume could not be read: {0}")]
    UnreadableDocument(String),

    #[error("Malformed extraction response: {parse_error}")]
    MalformedExtraction {
        raw_response: String,
        parse_error: String,
    },

    #[error("Malformed questions response: {parse_error}")]
    MalformedQuestions {
        raw_response: String,
        parse_error: String,
    },

    #[error("Question generation returned no questions")]
    NoQuestions,

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Action requires stage {expected:?}, session is in {actual:?}")]
    StageConflict { expected: Stage, actual: Stage },

    #[error("Validation error: {0}")]
    Validation(String),

    /// Multipart transport failure; keeps the status axum assigned to it
    /// (413 when the body limit is hit).
    #[error("Upload rejected: {message}")]
    UploadRejected { status: StatusCode, message: String },
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::UploadRejected {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::EmptyDocument => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_DOCUMENT",
                "This PDF seems to be an image or empty. Please upload a text-based PDF."
                    .to_string(),
            ),
            AppError::UnreadableDocument(msg) => {
                tracing::warn!("Unreadable document: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UNREADABLE_DOCUMENT",
                    "This file could not be read as a PDF. Please upload a text-based PDF."
                        .to_string(),
                )
            }
            AppError::MalformedExtraction { .. } => (
                StatusCode::BAD_GATEWAY,
                "MALFORMED_EXTRACTION",
                "Could not read resume automatically. Please try again.".to_string(),
            ),
            AppError::MalformedQuestions { .. } => (
                StatusCode::BAD_GATEWAY,
                "MALFORMED_QUESTIONS",
                "Error generating questions. Please try again.".to_string(),
            ),
            AppError::NoQuestions => (
                StatusCode::BAD_GATEWAY,
                "NO_QUESTIONS",
                "No interview questions were generated. Please try again.".to_string(),
            ),
            AppError::ExternalService(msg) => {
                tracing::error!("External service error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXTERNAL_SERVICE_ERROR",
                    "The AI service could not be reached. Please try again.".to_string(),
                )
            }
            AppError::StageConflict { .. } => {
                (StatusCode::CONFLICT, "STAGE_CONFLICT", self.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UploadRejected { status, message } => {
                tracing::warn!("Upload rejected ({status}): {message}");
                (*status, "UPLOAD_REJECTED", message.clone())
            }
        };

        let mut error = json!({
            "code": code,
            "message": message,
        });
        // Raw model output goes in a separate field; clients render it collapsed.
        if let Some(debug) = self.debug_detail() {
            error["debug"] = debug;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

impl AppError {
    fn debug_detail(&self) -> Option<serde_json::Value> {
        match self {
            AppError::MalformedExtraction {
                raw_response,
                parse_error,
            }
            | AppError::MalformedQuestions {
                raw_response,
                parse_error,
            } => Some(json!({
                "raw_response": raw_response,
                "parse_error": parse_error,
            })),
            _ => None,
        }
    }
}
