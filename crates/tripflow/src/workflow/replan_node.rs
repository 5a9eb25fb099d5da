//! Replan node: asks for a one-sentence revised plan over the transcript.
//!
//! The plan is appended as an assistant message and control returns to the
//! agent. Tool calls from the replanner are discarded; it plans, it does not
//! act. A replanner failure becomes a transcript line and the agent still
//! gets another turn.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::WorkflowError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::WorkflowState;

use super::{AGENT, REPLAN};

/// Default replanner system prompt.
pub const DEFAULT_REPLAN_PROMPT: &str = "You are an expert planner. The user has indicated that \
the previous attempt was unsuccessful. Analyze the conversation history and the last tool \
outputs. Formulate a new, single-sentence plan of action to achieve the user's goal. Your \
response should be a concise plan, not the answer itself.";

/// Replanning node.
pub struct ReplanNode {
    llm: Arc<dyn LlmClient>,
    system_prompt: String,
}

impl ReplanNode {
    /// Builds a replan node with the default replanner prompt.
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            system_prompt: DEFAULT_REPLAN_PROMPT.to_string(),
        }
    }

    /// Overrides the replanner prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }
}

#[async_trait]
impl Node<WorkflowState> for ReplanNode {
    fn id(&self) -> &str {
        REPLAN
    }

    async fn run(&self, state: WorkflowState) -> Result<(WorkflowState, Next), WorkflowError> {
        let mut state = state;
        let mut prompt = Vec::with_capacity(state.messages.len() + 1);
        prompt.push(Message::system(self.system_prompt.as_str()));
        prompt.extend_from_slice(&state.messages);

        match self.llm.complete(&prompt).await {
            Ok(resp) => {
                state.messages.push(Message::assistant(resp.content));
            }
            Err(e) => {
                tracing::warn!(error = %e, "replanner failed; agent resumes without a new plan");
                state
                    .messages
                    .push(Message::human(format!("Replanning failed: {e}")));
            }
        }
        Ok((state, Next::Node(AGENT.to_string())))
    }
}
