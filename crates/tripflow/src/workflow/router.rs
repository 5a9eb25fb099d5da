//! Transition rules, evaluated after the agent and checkpoint steps.
//!
//! Kept as pure functions so the transition table is testable without any
//! capability in the loop. The nodes apply the matching state changes
//! (transcript lines, counter increment, outcome) around these.

use crate::graph::Next;
use crate::review::Decision;
use crate::state::WorkflowState;

use super::{REPLAN, REVIEW, TOOLS};

/// After an agent step: pending tool calls go to the checkpoint, a direct
/// answer ends the run. Tools are never entered from here.
pub fn route_after_agent(state: &WorkflowState) -> Next {
    if state.pending_calls.is_empty() {
        Next::End
    } else {
        Next::Node(REVIEW.to_string())
    }
}

/// After a checkpoint decision.
///
/// Approve → tools; reject → end; replan → replan node, unless the budget is
/// already spent, in which case the request is ignored and the run ends.
pub fn route_decision(decision: Decision, replan_count: u32, max_replans: u32) -> Next {
    match decision {
        Decision::Approve => Next::Node(TOOLS.to_string()),
        Decision::Reject => Next::End,
        Decision::Replan if replan_count >= max_replans => Next::End,
        Decision::Replan => Next::Node(REPLAN.to_string()),
    }
}
