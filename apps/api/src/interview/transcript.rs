//! Chat Transcript Manager: drives the one-question-at-a-time interview loop.

use crate::errors::AppError;
use crate::interview::models::{Session, TurnRole};
use crate::interview::stage::Event;

pub const GREETING: &str = "Great! Let's start.";
pub const COMPLETION_MESSAGE: &str = "Thank you! You've answered all questions. \
Our engineering team will review your responses and get back to you.";

/// Formats a question for the transcript. `index` is 0-based.
pub fn format_question(index: usize, text: &str) -> String {
    format!("Question {}: {}", index + 1, text)
}

/// Installs the question list and asks the first question.
///
/// Fails with `NoQuestions` on an empty list, leaving the session untouched.
pub fn start(session: &mut Session, questions: Vec<String>) -> Result<(), AppError> {
    let first = questions.first().ok_or(AppError::NoQuestions)?;
    let opening = format!("{GREETING}\n\n{}", format_question(0, first));

    session.questions = questions;
    session.current_q_index = 0;
    session.push_turn(TurnRole::Assistant, opening);
    Ok(())
}

/// Records an answer and asks the next question, or closes the interview.
///
/// Answers are not validated; an empty string counts. Returns
/// `Some(Event::AllQuestionsAnswered)` once the last question is answered.
pub fn submit_answer(session: &mut Session, answer: String) -> Option<Event> {
    session.push_turn(TurnRole::User, answer);
    session.current_q_index += 1;

    match session.questions.get(session.current_q_index) {
        Some(next) => {
            let prompt = format_question(session.current_q_index, next);
            session.push_turn(TurnRole::Assistant, prompt);
            None
        }
        None => {
            session.push_turn(TurnRole::Assistant, COMPLETION_MESSAGE.to_string());
            Some(Event::AllQuestionsAnswered)
        }
    }
}
