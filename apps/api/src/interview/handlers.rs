//! Axum route handlers for the Interview API.
//!
//! Every handler locks the session for the whole interaction and returns the
//! re-rendered session view on success.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::interview::models::SessionView;
use crate::interview::orchestrator::{self, ConfirmInfoRequest};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(session.view())
}

/// POST /api/v1/session/resume
///
/// Multipart upload; the PDF goes in the `resume` field.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SessionView>, AppError> {
    let mut document = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        if !looks_like_pdf(field.content_type(), field.file_name()) {
            return Err(AppError::Validation(format!(
                "Resume must be a PDF, got {}",
                field.content_type().unwrap_or("an unknown file type")
            )));
        }
        let bytes = field.bytes().await?;
        document = Some(bytes.to_vec());
    }
    let document = document.ok_or_else(|| {
        AppError::Validation(format!("Multipart field '{RESUME_FIELD}' is required"))
    })?;

    let mut session = state.session.lock().await;
    orchestrator::upload_resume(
        &mut session,
        document,
        state.documents.as_ref(),
        state.llm.as_ref(),
    )
    .await?;
    Ok(Json(session.view()))
}

/// Browsers and HTTP clients disagree on the part's content type, so a PDF
/// media type (any case), a `.pdf` file name or no content type at all is
/// accepted. Unreadable bytes are caught later by the extractor.
fn looks_like_pdf(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return true;
    };
    let media_type = content_type.split(';').next().unwrap_or_default().trim();
    media_type.eq_ignore_ascii_case("application/pdf")
        || file_name.is_some_and(|name| name.to_ascii_lowercase().ends_with(".pdf"))
}

/// POST /api/v1/session/confirm
pub async fn handle_confirm_info(
    State(state): State<AppState>,
    Json(request): Json<ConfirmInfoRequest>,
) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.lock().await;
    orchestrator::confirm_info(
        &mut session,
        request,
        state.config.question_count,
        state.llm.as_ref(),
    )
    .await?;
    Ok(Json(session.view()))
}

/// POST /api/v1/session/answer
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.lock().await;
    orchestrator::submit_answer(&mut session, request.answer)?;
    Ok(Json(session.view()))
}

/// POST /api/v1/session/reset
pub async fn handle_reset(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    orchestrator::reset(&mut session);
    Json(session.view())
}
