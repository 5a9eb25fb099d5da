//! Workflow state and tool call/result types.
//!
//! `WorkflowState` is the single mutable record threaded through every node:
//! the transcript, the tool calls waiting on checkpoint approval, the replan
//! counter, and the terminal outcome once one is reached. Created fresh per
//! run, discarded after; no cross-session persistence here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::message::Message;

/// A single tool invocation requested by the agent.
///
/// Produced by the agent node from the LLM response; held in
/// `WorkflowState::pending_calls` until the human approves, then consumed by
/// the tools node via `ToolSource::call_tool(name, arguments)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name as registered in the `ToolSource`.
    pub name: String,
    /// Structured argument payload.
    pub arguments: Value,
    /// Optional id to correlate with `ToolResult::call_id`.
    pub id: Option<String>,
}

/// Result of executing one tool call.
///
/// Written by the tools node and appended to the transcript as
/// `Message::Tool`. A failed call still yields a result (with `is_error` set
/// and the error text as content) so sibling calls are not aborted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Id of the tool call this result belongs to, when the call had one.
    pub call_id: Option<String>,
    /// Tool name.
    pub name: String,
    /// Output payload, or error text when `is_error`.
    pub content: String,
    /// True when the call failed and `content` describes the failure.
    #[serde(default)]
    pub is_error: bool,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The agent produced a direct final answer.
    Answered,
    /// The human rejected a step; nothing further was executed.
    Rejected,
    /// A replan was requested with the budget already spent; hard stop.
    ReplanBudgetExhausted,
}

/// The mutable record threaded through every node of the workflow graph.
///
/// `messages` is append-only within a run. `replan_count` is incremented only
/// by a human replan decision and never exceeds the configured ceiling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowState {
    /// Full transcript: human input, agent output, tool results, decisions.
    pub messages: Vec<Message>,
    /// Tool calls from the latest agent step, awaiting checkpoint approval.
    pub pending_calls: Vec<ToolCall>,
    /// Number of replans granted so far.
    pub replan_count: u32,
    /// Set exactly once, when a terminal transition fires.
    pub outcome: Option<Outcome>,
}

impl WorkflowState {
    /// Creates the initial state for one run from the user's request.
    pub fn new(user_request: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::human(user_request)],
            ..Self::default()
        }
    }

    /// Last assistant message content, if any. This is the final answer once
    /// a run ends with `Outcome::Answered`.
    pub fn final_answer(&self) -> Option<&str> {
        self.messages.iter().rev().find_map(|m| match m {
            Message::Assistant(c) => Some(c.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_holds_request_only() {
        let s = WorkflowState::new("plan X");
        assert_eq!(s.messages.len(), 1);
        assert!(matches!(&s.messages[0], Message::Human(c) if c == "plan X"));
        assert!(s.pending_calls.is_empty());
        assert_eq!(s.replan_count, 0);
        assert_eq!(s.outcome, None);
    }

    #[test]
    fn final_answer_picks_last_assistant_message() {
        let mut s = WorkflowState::new("q");
        assert_eq!(s.final_answer(), None);
        s.messages.push(Message::assistant("first"));
        s.messages.push(Message::human("User approved the step."));
        s.messages.push(Message::assistant("second"));
        assert_eq!(s.final_answer(), Some("second"));
    }
}
