//! Mock LLM for tests and the demo mode.
//!
//! Scripted: each `complete` call pops the next queued response; when the
//! queue is empty the final response repeats. Also used as the replanner in
//! tests (a one-item script with a plan sentence).

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::llm::{LlmClient, LlmError, LlmResponse};
use crate::message::Message;
use crate::state::ToolCall;

/// Mock LLM: returns a scripted sequence of responses.
///
/// Build with `scripted` for full control, or use the shorthands:
/// `answering` (one direct answer, no tool calls) and
/// `search_then_answer` (first call requests `web_search`, second answers).
pub struct MockLlm {
    script: Mutex<VecDeque<LlmResponse>>,
    /// Returned when the script is exhausted.
    fallback: LlmResponse,
}

impl MockLlm {
    /// Builds a mock that replays the given responses in order, then repeats
    /// the last one.
    pub fn scripted(responses: Vec<LlmResponse>) -> Self {
        let fallback = responses.last().cloned().unwrap_or_default();
        Self {
            script: Mutex::new(responses.into()),
            fallback,
        }
    }

    /// Builds a mock that answers directly, with no tool calls.
    pub fn answering(content: impl Into<String>) -> Self {
        Self::scripted(vec![LlmResponse {
            content: content.into(),
            tool_calls: vec![],
        }])
    }

    /// Builds a mock whose first turn requests one `web_search` call and whose
    /// second turn answers directly.
    pub fn search_then_answer(query: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::scripted(vec![
            LlmResponse {
                content: "I'll look that up.".to_string(),
                tool_calls: vec![ToolCall {
                    name: "web_search".to_string(),
                    arguments: json!({ "query": query.into() }),
                    id: Some("call-1".to_string()),
                }],
            },
            LlmResponse {
                content: answer.into(),
                tool_calls: vec![],
            },
        ])
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn complete(&self, _messages: &[Message]) -> Result<LlmResponse, LlmError> {
        let mut script = self
            .script
            .lock()
            .map_err(|_| LlmError::ApiError("mock script poisoned".into()))?;
        Ok(script.pop_front().unwrap_or_else(|| self.fallback.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_replays_then_repeats_last() {
        let llm = MockLlm::scripted(vec![
            LlmResponse {
                content: "one".into(),
                tool_calls: vec![],
            },
            LlmResponse {
                content: "two".into(),
                tool_calls: vec![],
            },
        ]);
        assert_eq!(llm.complete(&[]).await.unwrap().content, "one");
        assert_eq!(llm.complete(&[]).await.unwrap().content, "two");
        assert_eq!(llm.complete(&[]).await.unwrap().content, "two");
    }

    #[tokio::test]
    async fn search_then_answer_requests_tool_first() {
        let llm = MockLlm::search_then_answer("flights to Berlin", "Here is your plan.");
        let first = llm.complete(&[]).await.unwrap();
        assert_eq!(first.tool_calls.len(), 1);
        assert_eq!(first.tool_calls[0].name, "web_search");
        let second = llm.complete(&[]).await.unwrap();
        assert!(second.tool_calls.is_empty());
        assert_eq!(second.content, "Here is your plan.");
    }
}
