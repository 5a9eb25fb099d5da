//! Review node: the mandatory human checkpoint.
//!
//! Surfaces the latest agent output (pending tool calls, or the last
//! transcript line) and blocks for a decision. A replan decision is only
//! granted while the budget lasts; at the ceiling the request is ignored and
//! the run ends. Pending calls are dropped on anything but approve.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::WorkflowError;
use crate::graph::{Next, Node};
use crate::message::Message;
use crate::review::{Decision, ReviewChannel, ReviewItem};
use crate::state::{Outcome, WorkflowState};

use super::router::route_decision;
use super::REVIEW;

/// Human checkpoint node.
pub struct ReviewNode {
    channel: Arc<dyn ReviewChannel>,
    max_replans: u32,
}

impl ReviewNode {
    /// Builds a checkpoint node with the given decision channel and replan ceiling.
    pub fn new(channel: Arc<dyn ReviewChannel>, max_replans: u32) -> Self {
        Self {
            channel,
            max_replans,
        }
    }

    fn item_for(state: &WorkflowState) -> ReviewItem {
        if !state.pending_calls.is_empty() {
            return ReviewItem::ToolRequest(state.pending_calls.clone());
        }
        let text = match state.messages.last() {
            Some(Message::Assistant(c)) | Some(Message::Human(c)) | Some(Message::System(c)) => {
                c.clone()
            }
            Some(Message::Tool(r)) => r.content.clone(),
            None => String::new(),
        };
        ReviewItem::AgentReply(text)
    }
}

#[async_trait]
impl Node<WorkflowState> for ReviewNode {
    fn id(&self) -> &str {
        REVIEW
    }

    async fn run(&self, state: WorkflowState) -> Result<(WorkflowState, Next), WorkflowError> {
        let mut state = state;
        let item = Self::item_for(&state);
        let decision = self
            .channel
            .decide(&item)
            .await
            .map_err(|e| WorkflowError::ExecutionFailed(e.to_string()))?;
        tracing::info!(?decision, replan_count = state.replan_count, "checkpoint decision");

        let next = route_decision(decision, state.replan_count, self.max_replans);
        match decision {
            Decision::Approve => {
                state.messages.push(Message::human("User approved the step."));
            }
            Decision::Reject => {
                state
                    .messages
                    .push(Message::human("User rejected the step. Halting."));
                state.pending_calls.clear();
                state.outcome = Some(Outcome::Rejected);
            }
            Decision::Replan => {
                if next == Next::End {
                    state.messages.push(Message::human(
                        "User requested a replan, but the replan budget is exhausted. Halting.",
                    ));
                    state.pending_calls.clear();
                    state.outcome = Some(Outcome::ReplanBudgetExhausted);
                } else {
                    state.replan_count += 1;
                    state.messages.push(Message::human("User requested a replan."));
                    state.pending_calls.clear();
                }
            }
        }
        Ok((state, next))
    }
}
