//! Transcript message types.
//!
//! A run's transcript is an append-only `Vec<Message>`: system prompt first
//! (when set), then human input, assistant output, and tool results in the
//! order they happened. Nodes only ever push; nothing reorders.

use serde::{Deserialize, Serialize};

use crate::state::ToolResult;

/// A single message in the workflow transcript.
///
/// Roles: system prompt, human input (including checkpoint decisions rendered
/// as text), assistant output, and one entry per executed tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "role", content = "content")]
pub enum Message {
    /// System prompt; typically placed first in the transcript.
    System(String),
    /// Human input: the initial request or a checkpoint decision.
    Human(String),
    /// Agent output text.
    Assistant(String),
    /// Result of one executed tool call.
    Tool(ToolResult),
}

impl Message {
    /// Builds a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Builds a human message.
    pub fn human(content: impl Into<String>) -> Self {
        Self::Human(content.into())
    }

    /// Builds an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }

    /// Builds a tool-result message.
    pub fn tool(result: ToolResult) -> Self {
        Self::Tool(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_role() {
        assert!(matches!(Message::system("s"), Message::System(c) if c == "s"));
        assert!(matches!(Message::human("h"), Message::Human(c) if c == "h"));
        assert!(matches!(Message::assistant("a"), Message::Assistant(c) if c == "a"));
    }
}
