// Interview flow: UPLOAD → CONFIRM_INFO → INTERVIEW → END.
// Stage handlers live in orchestrator; the adapters are the only callers of
// the completion service.

pub mod extraction;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod prompts;
pub mod questions;
pub mod stage;
pub mod transcript;
