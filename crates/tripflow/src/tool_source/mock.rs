//! Mock tool source for tests and the demo mode.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{ToolCallContent, ToolSource, ToolSourceError, ToolSpec};

/// Mock tool source: fixed name → response text map.
///
/// Deterministic: the same call always yields the same content, which is what
/// the idempotent-replay tests rely on. Unknown names return
/// `ToolSourceError::NotFound`; names registered via `failing` return
/// `Transport` errors to exercise sibling-isolation.
#[derive(Default)]
pub struct MockToolSource {
    responses: HashMap<String, String>,
    failing: HashMap<String, String>,
}

impl MockToolSource {
    /// Builds an empty source; register tools with `with_tool` / `failing`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool that always returns `text`.
    pub fn with_tool(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.responses.insert(name.into(), text.into());
        self
    }

    /// Registers a tool that always fails with the given error text.
    pub fn failing(mut self, name: impl Into<String>, error: impl Into<String>) -> Self {
        self.failing.insert(name.into(), error.into());
        self
    }

    /// A source with one `web_search` tool returning canned search output.
    pub fn web_search_example() -> Self {
        Self::new().with_tool(
            "web_search",
            "1. Museum Island day pass, 2. Reichstag dome tickets, 3. East Side Gallery walk",
        )
    }
}

#[async_trait]
impl ToolSource for MockToolSource {
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError> {
        let mut specs: Vec<ToolSpec> = self
            .responses
            .keys()
            .chain(self.failing.keys())
            .map(|name| ToolSpec {
                name: name.clone(),
                description: Some(format!("mock tool {name}")),
                input_schema: json!({ "type": "object" }),
            })
            .collect();
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(specs)
    }

    async fn call_tool(
        &self,
        name: &str,
        _arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError> {
        if let Some(err) = self.failing.get(name) {
            return Err(ToolSourceError::Transport(err.clone()));
        }
        match self.responses.get(name) {
            Some(text) => Ok(ToolCallContent { text: text.clone() }),
            None => Err(ToolSourceError::NotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn call_tool_returns_registered_text() {
        let tools = MockToolSource::new().with_tool("echo", "hi");
        let out = tools.call_tool("echo", json!({})).await.unwrap();
        assert_eq!(out.text, "hi");
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let tools = MockToolSource::new();
        let err = tools.call_tool("nope", json!({})).await.unwrap_err();
        assert!(matches!(err, ToolSourceError::NotFound(n) if n == "nope"));
    }

    #[tokio::test]
    async fn failing_tool_returns_transport_error() {
        let tools = MockToolSource::new().failing("search", "timeout");
        let err = tools.call_tool("search", json!({})).await.unwrap_err();
        assert!(matches!(err, ToolSourceError::Transport(t) if t == "timeout"));
    }
}
