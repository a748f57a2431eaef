// Interview LLM prompt templates.
// All prompts for the interview module are defined here.

/// Resume extraction prompt. Replace `{resume_text}` before sending.
pub const RESUME_ANALYSIS_PROMPT: &str = r#"Analyze the following resume text and extract the candidate's information in strictly valid JSON format.
Keys required: "full_name", "email", "years_of_experience", "tech_stack" (as a list of strings).
Do not add any conversational text, just the JSON.

Resume Text:
{resume_text}"#;

/// System instruction fixing the question output shape. Replace `{count}`.
pub const QUESTION_GENERATION_SYSTEM: &str = "You return strictly a JSON object with a key \
'questions' containing a list of {count} strings.";

/// Question generation prompt. Replace `{tech_stack}` and `{count}` before sending.
pub const QUESTION_GENERATION_PROMPT: &str = r#"Based on the candidate's tech stack: {tech_stack}, generate exactly {count} technical interview questions ordered from simple to hard.
Return them as a JSON object of the form {"questions": ["...", "..."]}. Do not number them."#;
