//! Agent node: one reasoning step over the transcript.
//!
//! Calls the LLM with an optional system prompt prepended. A response with
//! tool calls parks them in `pending_calls` and routes to the checkpoint; a
//! plain answer ends the run. An LLM failure becomes a transcript line and
//! still routes to the checkpoint, so the human decides what happens next.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::WorkflowError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::{Outcome, WorkflowState};

use super::router::route_after_agent;
use super::{AGENT, REVIEW};

/// Default system prompt, a travel-planning assistant.
pub const DEFAULT_AGENT_PROMPT: &str = "You are a helpful travel planning assistant. Your goal is to \
find the best flights, hotels, and create an itinerary based on the user's request. Use the \
tools provided to find the necessary information. Once you have a final answer, respond \
directly to the user without calling any more tools.";

/// Agent node: produces the next assistant turn and its tool requests.
pub struct AgentNode {
    llm: Arc<dyn LlmClient>,
    system_prompt: String,
}

impl AgentNode {
    /// Builds an agent node with the default system prompt.
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            system_prompt: DEFAULT_AGENT_PROMPT.to_string(),
        }
    }

    /// Overrides the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    fn prompt(&self, state: &WorkflowState) -> Vec<Message> {
        let mut messages = Vec::with_capacity(state.messages.len() + 1);
        messages.push(Message::system(self.system_prompt.as_str()));
        messages.extend_from_slice(&state.messages);
        messages
    }
}

#[async_trait]
impl Node<WorkflowState> for AgentNode {
    fn id(&self) -> &str {
        AGENT
    }

    async fn run(&self, state: WorkflowState) -> Result<(WorkflowState, Next), WorkflowError> {
        let mut state = state;
        match self.llm.complete(&self.prompt(&state)).await {
            Ok(resp) => {
                state.messages.push(Message::assistant(resp.content));
                state.pending_calls = resp.tool_calls;
                let next = route_after_agent(&state);
                if next == Next::End {
                    state.outcome = Some(Outcome::Answered);
                }
                Ok((state, next))
            }
            Err(e) => {
                tracing::warn!(error = %e, "agent invocation failed; continuing to checkpoint");
                state
                    .messages
                    .push(Message::human(format!("Agent invocation failed: {e}")));
                state.pending_calls.clear();
                Ok((state, Next::Node(REVIEW.to_string())))
            }
        }
    }
}
