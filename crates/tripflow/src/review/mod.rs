//! Human decision channel: the mandatory checkpoint before any tool runs.
//!
//! The review node surfaces the latest agent output as a `ReviewItem` and
//! blocks on one of three decisions. Implementations: `ScriptedReview`
//! (tests/demo) and the console prompt in the CLI crate.

mod scripted;

pub use scripted::ScriptedReview;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::ToolCall;

/// A human reviewer's decision at a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Execute the pending tool calls (or continue when there are none).
    Approve,
    /// Halt the run; nothing further is executed.
    Reject,
    /// Discard the pending step and ask for a revised plan (bounded).
    Replan,
}

/// What the reviewer is shown: the latest agent output.
#[derive(Debug, Clone)]
pub enum ReviewItem {
    /// The agent wants to run these tool calls.
    ToolRequest(Vec<ToolCall>),
    /// The agent produced text (including recovered failure notices).
    AgentReply(String),
}

/// Error from the decision channel itself.
///
/// Unlike LLM and tool failures this aborts the run: without a reviewer the
/// mandatory gate cannot be enforced.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("review channel closed: {0}")]
    Closed(String),
}

/// Human decision channel: present the latest agent output, block for a decision.
#[async_trait]
pub trait ReviewChannel: Send + Sync {
    /// Presents the item and waits for a decision.
    async fn decide(&self, item: &ReviewItem) -> Result<Decision, ReviewError>;
}
