//! Agent/LLM capability: given the transcript, return a final text answer or
//! tool-invocation requests.
//!
//! - `LlmClient`: the async capability trait the workflow nodes depend on
//! - `LlmResponse`: assistant text plus optional tool calls
//! - `MockLlm`: scripted client for tests and the demo mode
//! - `OpenAiClient`: Chat Completions over HTTP (feature `openai`)

mod error;
mod mock;
#[cfg(feature = "openai")]
mod openai;

pub use error::LlmError;
pub use mock::MockLlm;
#[cfg(feature = "openai")]
pub use openai::{OpenAiClient, OpenAiConfig};

use async_trait::async_trait;

use crate::message::Message;
use crate::state::ToolCall;

/// One reasoning step's output: assistant text and the tool calls it wants.
///
/// `tool_calls` empty means the agent answered directly; the workflow treats
/// that as a terminal answer. Non-empty means the calls wait on the human
/// checkpoint before execution.
#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    /// Assistant message content.
    pub content: String,
    /// Tool-invocation requests, possibly empty.
    pub tool_calls: Vec<ToolCall>,
}

/// Reasoning capability: transcript in, `LlmResponse` out.
///
/// Opaque beyond this contract; the workflow never depends on a provider's
/// wire format. Implementations: `MockLlm`, `OpenAiClient` (feature `openai`).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Produces the next assistant turn for the given transcript.
    async fn complete(&self, messages: &[Message]) -> Result<LlmResponse, LlmError>;
}
