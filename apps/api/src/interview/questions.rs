//! Question Generation Adapter: produces technical questions for a tech stack.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::interview::prompts::{QUESTION_GENERATION_PROMPT, QUESTION_GENERATION_SYSTEM};
use crate::llm_client::prompts::RECRUITER_PERSONA;
use crate::llm_client::{strip_json_fences, ChatMessage, CompletionService};

#[derive(Debug, Deserialize)]
struct QuestionsPayload {
    questions: Vec<String>,
}

/// Asks the completion service for `count` questions about `tech_stack`.
///
/// Returns the questions exactly as the model ordered them. An empty list is a
/// valid result here; the caller decides whether it can start an interview.
pub async fn generate_questions(
    tech_stack: &str,
    count: usize,
    llm: &dyn CompletionService,
) -> Result<Vec<String>, AppError> {
    let count = count.to_string();
    let system = QUESTION_GENERATION_SYSTEM.replace("{count}", &count);
    // user text goes in last so placeholders inside it are sent verbatim
    let prompt = QUESTION_GENERATION_PROMPT
        .replace("{count}", &count)
        .replace("{tech_stack}", tech_stack);
    let messages = [
        ChatMessage::system(format!("{RECRUITER_PERSONA} {system}")),
        ChatMessage::user(prompt),
    ];

    let raw = llm
        .complete(&messages, true)
        .await
        .map_err(|e| AppError::ExternalService(format!("Question generation failed: {e}")))?;
    debug!("Question generation raw response: {raw}");

    parse_questions(&raw)
}

fn parse_questions(raw: &str) -> Result<Vec<String>, AppError> {
    serde_json::from_str::<QuestionsPayload>(strip_json_fences(raw))
        .map(|payload| payload.questions)
        .map_err(|e| {
            warn!("Questions response did not parse: {e}");
            AppError::MalformedQuestions {
                raw_response: raw.to_string(),
                parse_error: e.to_string(),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::fake::ScriptedCompletion;
    use crate::llm_client::MessageRole;

    #[test]
    fn test_parse_keeps_model_order() {
        let questions =
            parse_questions(r#"{"questions": ["b", "a", "a"]}"#).unwrap();
        assert_eq!(questions, vec!["b", "a", "a"]);
    }

    #[test]
    fn test_missing_questions_key() {
        let err = parse_questions(r#"{"items": ["a"]}"#).unwrap_err();
        match err {
            AppError::MalformedQuestions {
                raw_response,
                parse_error,
            } => {
                assert_eq!(raw_response, r#"{"items": ["a"]}"#);
                assert!(parse_error.contains("questions"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_string_questions_rejected() {
        let err = parse_questions(r#"{"questions": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedQuestions { .. }));

        let err = parse_questions(r#"{"questions": "one"}"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedQuestions { .. }));
    }

    #[test]
    fn test_bare_list_rejected() {
        let err = parse_questions(r#"["a", "b"]"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedQuestions { .. }));
    }

    #[tokio::test]
    async fn test_count_reaches_both_messages() {
        let llm = ScriptedCompletion::new().with_reply(r#"{"questions": ["q1", "q2", "q3"]}"#);

        let questions = generate_questions("Rust, Tokio", 3, &llm).await.unwrap();
        assert_eq!(questions.len(), 3);

        let calls = llm.calls();
        assert!(calls[0].json_mode);
        let system = &calls[0].messages[0];
        let user = &calls[0].messages[1];
        assert_eq!(system.role, MessageRole::System);
        assert!(system.content.contains("list of 3 strings"));
        assert_eq!(user.role, MessageRole::User);
        assert!(user.content.contains("exactly 3"));
        assert!(user.content.contains("Rust, Tokio"));
    }

    #[tokio::test]
    async fn test_tech_stack_placeholders_are_sent_verbatim() {
        let llm = ScriptedCompletion::new().with_reply(r#"{"questions": ["q1"]}"#);

        generate_questions("Rust fmt::{count} macros", 5, &llm)
            .await
            .unwrap();

        let user = &llm.calls()[0].messages[1].content;
        assert!(user.contains("tech stack: Rust fmt::{count} macros, generate exactly 5"));
    }

    #[tokio::test]
    async fn test_empty_list_is_returned_not_rejected() {
        let llm = ScriptedCompletion::new().with_reply(r#"{"questions": []}"#);
        let questions = generate_questions("Rust", 5, &llm).await.unwrap();
        assert!(questions.is_empty());
    }
}
