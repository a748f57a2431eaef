//! Interview stage machine: pure `(stage, event) -> stage` mapping.

use serde::{Deserialize, Serialize};

/// The four mutually exclusive screens of an interview run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    #[default]
    Upload,
    ConfirmInfo,
    Interview,
    End,
}

/// Events raised by stage handlers after a user interaction succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    ResumeParsed,
    InfoConfirmed,
    AllQuestionsAnswered,
    Reset,
}

/// Maps a stage and an event to the next stage.
///
/// Forward-only: UPLOAD → CONFIRM_INFO → INTERVIEW → END. `Reset` returns to
/// UPLOAD from anywhere. Every other pair leaves the stage unchanged.
pub fn transition(current: Stage, event: Event) -> Stage {
    match (current, event) {
        (_, Event::Reset) => Stage::Upload,
        (Stage::Upload, Event::ResumeParsed) => Stage::ConfirmInfo,
        (Stage::ConfirmInfo, Event::InfoConfirmed) => Stage::Interview,
        (Stage::Interview, Event::AllQuestionsAnswered) => Stage::End,
        (stage, _) => stage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAGES: [Stage; 4] = [
        Stage::Upload,
        Stage::ConfirmInfo,
        Stage::Interview,
        Stage::End,
    ];
    const EVENTS: [Event; 4] = [
        Event::ResumeParsed,
        Event::InfoConfirmed,
        Event::AllQuestionsAnswered,
        Event::Reset,
    ];

    fn valid_event(stage: Stage) -> Option<Event> {
        match stage {
            Stage::Upload => Some(Event::ResumeParsed),
            Stage::ConfirmInfo => Some(Event::InfoConfirmed),
            Stage::Interview => Some(Event::AllQuestionsAnswered),
            Stage::End => None,
        }
    }

    #[test]
    fn test_forward_path() {
        let s = transition(Stage::Upload, Event::ResumeParsed);
        assert_eq!(s, Stage::ConfirmInfo);
        let s = transition(s, Event::InfoConfirmed);
        assert_eq!(s, Stage::Interview);
        let s = transition(s, Event::AllQuestionsAnswered);
        assert_eq!(s, Stage::End);
    }

    #[test]
    fn test_reset_from_every_stage() {
        for stage in STAGES {
            assert_eq!(transition(stage, Event::Reset), Stage::Upload);
        }
    }

    #[test]
    fn test_invalid_events_are_noops() {
        for stage in STAGES {
            for event in EVENTS {
                if event == Event::Reset || Some(event) == valid_event(stage) {
                    continue;
                }
                assert_eq!(
                    transition(stage, event),
                    stage,
                    "{event:?} should not move {stage:?}"
                );
            }
        }
    }

    #[test]
    fn test_stage_serializes_screaming_case() {
        assert_eq!(
            serde_json::to_string(&Stage::ConfirmInfo).unwrap(),
            "\"CONFIRM_INFO\""
        );
        assert_eq!(Stage::default(), Stage::Upload);
    }
}
