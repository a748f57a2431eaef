// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to every JSON-mode prompt.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Recruiter persona shared by all interview prompts.
pub const RECRUITER_PERSONA: &str = "\
    You are \"TalentScout,\" a friendly and professional technical recruiter. \
    Your goal is to assess the candidate's declared tech stack. \
    Keep your responses concise and professional.";
