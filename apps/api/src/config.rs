use anyhow::{bail, Context, Result};

const DEFAULT_QUESTION_COUNT: usize = 5;
const MAX_QUESTION_COUNT: usize = 20;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or a value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    /// Number of technical questions requested per interview.
    pub question_count: usize,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let question_count = optional_env("QUESTION_COUNT")
            .map(|v| v.parse::<usize>())
            .transpose()
            .context("QUESTION_COUNT must be a positive integer")?
            .unwrap_or(DEFAULT_QUESTION_COUNT);
        validate_question_count(question_count)?;

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            question_count,
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn validate_question_count(count: usize) -> Result<()> {
    if !(1..=MAX_QUESTION_COUNT).contains(&count) {
        bail!("QUESTION_COUNT must be between 1 and {MAX_QUESTION_COUNT}, got {count}");
    }
    Ok(())
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
