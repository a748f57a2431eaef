//! Resume Extraction Adapter: turns raw resume text into `CandidateInfo`.

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::interview::models::CandidateInfo;
use crate::interview::prompts::RESUME_ANALYSIS_PROMPT;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, RECRUITER_PERSONA};
use crate::llm_client::{strip_json_fences, ChatMessage, CompletionService};

/// Extracts candidate info from resume text via the completion service.
///
/// The caller checks for empty text first. The response is fence-stripped and
/// parsed; a parse failure keeps the raw text for the debug panel.
pub async fn extract_candidate_info(
    resume_text: &str,
    llm: &dyn CompletionService,
) -> Result<CandidateInfo, AppError> {
    let prompt = RESUME_ANALYSIS_PROMPT.replace("{resume_text}", resume_text);
    let messages = [
        ChatMessage::system(format!("{RECRUITER_PERSONA} {JSON_ONLY_INSTRUCTION}")),
        ChatMessage::user(prompt),
    ];

    let raw = llm
        .complete(&messages, true)
        .await
        .map_err(|e| AppError::ExternalService(format!("Resume extraction failed: {e}")))?;
    debug!("Extraction raw response: {raw}");

    parse_candidate_info(&raw)
}

fn parse_candidate_info(raw: &str) -> Result<CandidateInfo, AppError> {
    serde_json::from_str(strip_json_fences(raw)).map_err(|e| {
        warn!("Extraction response did not parse: {e}");
        AppError::MalformedExtraction {
            raw_response: raw.to_string(),
            parse_error: e.to_string(),
        }
    })
}
