//! LLM invocation errors.
//!
//! These never abort a workflow run: the agent and replan nodes fold them
//! into the transcript and continue to the next checkpoint.

use thiserror::Error;

/// Error from invoking the reasoning capability.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// API returned an error (4xx/5xx or a business error).
    #[error("api error: {0}")]
    ApiError(String),

    /// Rate limited (e.g. 429).
    #[error("rate limit: {0}")]
    RateLimit(String),

    /// Authentication failed (e.g. 401/403).
    #[error("auth failed: {0}")]
    Auth(String),

    /// Invalid request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// Response could not be parsed.
    #[error("parsing failed: {0}")]
    Parsing(String),
}
