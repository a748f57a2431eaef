use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::interview::stage::{transition, Event, Stage};

/// Years of experience as the model reported it: `5`, `4.5` or `"5+"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearsOfExperience {
    Number(serde_json::Number),
    Text(String),
}

/// Structured candidate data extracted from a resume.
///
/// Every key is optional. A key the model did not return stays `None` and is
/// omitted on serialization; nothing is defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<YearsOfExperience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
}

impl CandidateInfo {
    /// The tech stack as a single comma-separated line, empty if unknown.
    pub fn tech_stack_description(&self) -> String {
        self.tech_stack
            .as_deref()
            .map(|items| items.join(", "))
            .unwrap_or_default()
    }
}

/// Splits free-text tech stack input ("Rust, Go,  SQL") into trimmed items.
pub fn split_tech_stack(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One entry in the interview transcript. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

/// The single in-memory record of one candidate's interview run.
///
/// Fields are only writable from inside the `interview` module so the stage
/// handlers and the transcript manager are the only mutators.
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) session_id: Uuid,
    pub(super) created_at: DateTime<Utc>,
    pub(super) stage: Stage,
    pub(super) candidate_info: CandidateInfo,
    pub(super) questions: Vec<String>,
    pub(super) current_q_index: usize,
    pub(super) chat_history: Vec<ChatTurn>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            created_at: Utc::now(),
            stage: Stage::Upload,
            candidate_info: CandidateInfo::default(),
            questions: Vec::new(),
            current_q_index: 0,
            chat_history: Vec::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn candidate_info(&self) -> &CandidateInfo {
        &self.candidate_info
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn current_q_index(&self) -> usize {
        self.current_q_index
    }

    pub fn chat_history(&self) -> &[ChatTurn] {
        &self.chat_history
    }

    /// The question awaiting an answer, if the interview is in progress.
    pub fn current_question(&self) -> Option<&str> {
        if self.stage != Stage::Interview {
            return None;
        }
        self.questions.get(self.current_q_index).map(String::as_str)
    }

    /// Applies an event through the stage machine.
    /// `Reset` replaces the whole session in one assignment.
    pub fn apply(&mut self, event: Event) {
        if event == Event::Reset {
            *self = Session::new();
            return;
        }
        self.stage = transition(self.stage, event);
    }

    pub(super) fn push_turn(&mut self, role: TurnRole, content: String) {
        self.chat_history.push(ChatTurn { role, content });
    }

    /// Snapshot of everything the presentation layer needs to render.
    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.session_id,
            created_at: self.created_at,
            stage: self.stage(),
            candidate_info: self.candidate_info().clone(),
            chat_history: self.chat_history().to_vec(),
            current_q_index: self.current_q_index(),
            total_questions: self.questions().len(),
            current_question: self.current_question().map(String::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub stage: Stage,
    pub candidate_info: CandidateInfo,
    pub chat_history: Vec<ChatTurn>,
    pub current_q_index: usize,
    pub total_questions: usize,
    pub current_question: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_info_absent_keys_stay_absent() {
        let info: CandidateInfo = serde_json::from_str(r#"{"full_name":"A"}"#).unwrap();
        assert_eq!(info.full_name.as_deref(), Some("A"));
        assert!(info.email.is_none());
        assert!(info.tech_stack.is_none());
        assert_eq!(serde_json::to_string(&info).unwrap(), r#"{"full_name":"A"}"#);
    }

    #[test]
    fn test_years_of_experience_number_or_text() {
        let info: CandidateInfo =
            serde_json::from_str(r#"{"years_of_experience": 4}"#).unwrap();
        assert_eq!(
            info.years_of_experience,
            Some(YearsOfExperience::Number(4u64.into()))
        );

        let info: CandidateInfo =
            serde_json::from_str(r#"{"years_of_experience": "5+"}"#).unwrap();
        assert_eq!(
            info.years_of_experience,
            Some(YearsOfExperience::Text("5+".to_string()))
        );
    }

    #[test]
    fn test_null_fields_deserialize_as_absent() {
        let info: CandidateInfo =
            serde_json::from_str(r#"{"email": null, "tech_stack": ["Rust"]}"#).unwrap();
        assert!(info.email.is_none());
        assert_eq!(info.tech_stack_description(), "Rust");
    }

    #[test]
    fn test_split_tech_stack_trims_and_drops_empty() {
        assert_eq!(
            split_tech_stack(" Rust,Go , ,SQL "),
            vec!["Rust".to_string(), "Go".to_string(), "SQL".to_string()]
        );
        assert!(split_tech_stack("  ").is_empty());
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut session = Session::new();
        let old_id = session.session_id();
        session.stage = Stage::Interview;
        session.candidate_info.full_name = Some("Ada".to_string());
        session.questions = vec!["q1".to_string()];
        session.current_q_index = 1;
        session.push_turn(TurnRole::Assistant, "Question 1: q1".to_string());

        session.apply(Event::Reset);

        assert_eq!(session.stage(), Stage::Upload);
        assert_eq!(session.candidate_info(), &CandidateInfo::default());
        assert!(session.questions().is_empty());
        assert_eq!(session.current_q_index(), 0);
        assert!(session.chat_history().is_empty());
        assert_ne!(session.session_id(), old_id);
    }

    #[test]
    fn test_current_question_only_during_interview() {
        let mut session = Session::new();
        session.questions = vec!["q1".to_string()];
        assert!(session.current_question().is_none());
        session.stage = Stage::Interview;
        assert_eq!(session.current_question(), Some("q1"));
    }
}
