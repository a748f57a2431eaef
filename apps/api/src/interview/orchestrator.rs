//! Interview orchestrator: one handler per user interaction.
//!
//! Flow per stage:
//!   UPLOAD       → extract text → extraction adapter → `ResumeParsed`
//!   CONFIRM_INFO → apply edits → question adapter → transcript start → `InfoConfirmed`
//!   INTERVIEW    → transcript answer → `AllQuestionsAnswered` after the last one
//!   any          → reset
//!
//! A handler that fails returns before touching the session, so the stage
//! never advances on error and the user can retry the same action.

use serde::Deserialize;
use tracing::info;

use crate::document::DocumentExtractor;
use crate::errors::AppError;
use crate::interview::extraction::extract_candidate_info;
use crate::interview::models::{split_tech_stack, Session};
use crate::interview::questions::generate_questions;
use crate::interview::stage::{Event, Stage};
use crate::interview::transcript;
use crate::llm_client::CompletionService;

/// Candidate fields as confirmed (and possibly edited) by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfirmInfoRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// Free-text tech stack; overrides the extracted list when present.
    pub tech_stack: Option<String>,
}

fn require_stage(session: &Session, expected: Stage) -> Result<(), AppError> {
    if session.stage() != expected {
        return Err(AppError::StageConflict {
            expected,
            actual: session.stage(),
        });
    }
    Ok(())
}

/// UPLOAD stage: reads the resume and extracts candidate info.
pub async fn upload_resume(
    session: &mut Session,
    document: Vec<u8>,
    extractor: &dyn DocumentExtractor,
    llm: &dyn CompletionService,
) -> Result<(), AppError> {
    require_stage(session, Stage::Upload)?;

    let resume_text = extractor.extract_text(document).await?;
    if resume_text.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }

    let candidate_info = extract_candidate_info(&resume_text, llm).await?;

    session.candidate_info = candidate_info;
    session.apply(Event::ResumeParsed);
    info!(
        "Session {}: resume parsed, awaiting confirmation",
        session.session_id()
    );
    Ok(())
}

/// CONFIRM_INFO stage: stores the user's edits, generates questions and opens
/// the interview.
pub async fn confirm_info(
    session: &mut Session,
    request: ConfirmInfoRequest,
    question_count: usize,
    llm: &dyn CompletionService,
) -> Result<(), AppError> {
    require_stage(session, Stage::ConfirmInfo)?;

    let mut candidate_info = session.candidate_info.clone();
    if let Some(name) = request.full_name {
        candidate_info.full_name = Some(name);
    }
    if let Some(email) = request.email {
        candidate_info.email = Some(email);
    }
    let tech_stack = match request.tech_stack {
        Some(text) => {
            candidate_info.tech_stack = Some(split_tech_stack(&text));
            text
        }
        None => candidate_info.tech_stack_description(),
    };

    let questions = generate_questions(&tech_stack, question_count, llm).await?;
    if questions.is_empty() {
        return Err(AppError::NoQuestions);
    }

    let total = questions.len();
    session.candidate_info = candidate_info;
    transcript::start(session, questions)?;
    session.apply(Event::InfoConfirmed);
    info!(
        "Session {}: interview started with {total} questions",
        session.session_id()
    );
    Ok(())
}

/// INTERVIEW stage: records one answer and advances the transcript.
pub fn submit_answer(session: &mut Session, answer: String) -> Result<(), AppError> {
    require_stage(session, Stage::Interview)?;

    if let Some(event) = transcript::submit_answer(session, answer) {
        session.apply(event);
        info!("Session {}: all questions answered", session.session_id());
    }
    Ok(())
}

/// Any stage: discards the current candidate and starts over.
pub fn reset(session: &mut Session) {
    let previous = session.session_id();
    session.apply(Event::Reset);
    info!(
        "Session {previous} reset; new session {}",
        session.session_id()
    );
}
