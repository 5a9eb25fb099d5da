//! Tool capability set: list tools and call a tool.
//!
//! The workflow depends on `ToolSource` instead of a concrete registry; each
//! tool is independent and stateless from the controller's perspective.
//! Implementations: `MockToolSource` (tests/demo) and `TavilySearch`
//! (feature `tavily`).

mod mock;
#[cfg(feature = "tavily")]
mod tavily;

pub use mock::MockToolSource;
#[cfg(feature = "tavily")]
pub use tavily::TavilySearch;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Tool specification: name, description, argument schema.
///
/// Returned by `ToolSource::list_tools()`; also feeds the tool definitions an
/// LLM client attaches to its requests.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Tool name the agent uses in its tool calls.
    pub name: String,
    /// Human-readable description for the LLM.
    pub description: Option<String>,
    /// JSON Schema for arguments.
    pub input_schema: Value,
}

/// Result of a single successful tool call.
#[derive(Debug, Clone)]
pub struct ToolCallContent {
    /// Result text.
    pub text: String,
}

/// Errors from listing or calling tools.
///
/// Per-call errors do not abort the workflow: the tools node turns them into
/// error-flagged `ToolResult`s and the run continues.
#[derive(Debug, Error)]
pub enum ToolSourceError {
    #[error("tool not found: {0}")]
    NotFound(String),
    #[error("invalid arguments: {0}")]
    InvalidInput(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Tool source: list tools and call a tool by name with JSON arguments.
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// Lists available tools.
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError>;

    /// Calls a tool by name with JSON arguments.
    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError>;
}
