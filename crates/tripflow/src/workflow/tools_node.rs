//! Tools node: executes every pending call, then hands control back to the agent.
//!
//! A single join point: all pending calls run before the agent resumes. A
//! failed call becomes an error-flagged result in the transcript and does not
//! abort its siblings.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::WorkflowError;
use crate::graph::{Next, Node};
use crate::message::Message;
use crate::state::{ToolResult, WorkflowState};
use crate::tool_source::ToolSource;

use super::{AGENT, TOOLS};

/// Tool-execution node.
pub struct ToolsNode {
    tools: Arc<dyn ToolSource>,
}

impl ToolsNode {
    /// Builds a tools node over the given tool source.
    pub fn new(tools: Arc<dyn ToolSource>) -> Self {
        Self { tools }
    }
}

#[async_trait]
impl Node<WorkflowState> for ToolsNode {
    fn id(&self) -> &str {
        TOOLS
    }

    async fn run(&self, state: WorkflowState) -> Result<(WorkflowState, Next), WorkflowError> {
        let mut state = state;
        let calls = std::mem::take(&mut state.pending_calls);
        for call in &calls {
            let result = match self.tools.call_tool(&call.name, call.arguments.clone()).await {
                Ok(content) => ToolResult {
                    call_id: call.id.clone(),
                    name: call.name.clone(),
                    content: content.text,
                    is_error: false,
                },
                Err(e) => {
                    tracing::warn!(tool = %call.name, error = %e, "tool call failed");
                    ToolResult {
                        call_id: call.id.clone(),
                        name: call.name.clone(),
                        content: e.to_string(),
                        is_error: true,
                    }
                }
            };
            state.messages.push(Message::tool(result));
        }
        Ok((state, Next::Node(AGENT.to_string())))
    }
}
