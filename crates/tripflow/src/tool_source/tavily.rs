//! Tavily web search as a tool source.
//!
//! Exposes one tool, `web_search`, backed by the Tavily search API with a
//! bounded result count.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{ToolCallContent, ToolSource, ToolSourceError, ToolSpec};

const TAVILY_URL: &str = "https://api.tavily.com/search";

/// Web search tool source backed by Tavily.
pub struct TavilySearch {
    api_key: String,
    max_results: u32,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
    url: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

impl TavilySearch {
    /// Builds a search source with the given API key and at most three
    /// results per query.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            max_results: 3,
            client: reqwest::Client::new(),
        }
    }

    /// Builds from the `TAVILY_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ToolSourceError> {
        let api_key = std::env::var("TAVILY_API_KEY")
            .map_err(|_| ToolSourceError::Transport("TAVILY_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Overrides the result count cap.
    pub fn with_max_results(mut self, n: u32) -> Self {
        self.max_results = n;
        self
    }
}

#[async_trait]
impl ToolSource for TavilySearch {
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError> {
        Ok(vec![ToolSpec {
            name: "web_search".to_string(),
            description: Some(
                "Search the web for current information. Use for flights, hotels, \
                 opening hours, prices."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "search query" }
                },
                "required": ["query"]
            }),
        }])
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError> {
        if name != "web_search" {
            return Err(ToolSourceError::NotFound(name.to_string()));
        }
        let query = arguments
            .get("query")
            .and_then(Value::as_str)
            .ok_or_else(|| ToolSourceError::InvalidInput("missing string field: query".into()))?;

        let body = json!({
            "api_key": self.api_key,
            "query": query,
            "max_results": self.max_results,
        });
        let res = self
            .client
            .post(TAVILY_URL)
            .json(&body)
            .send()
            .await
            .map_err(|e| ToolSourceError::Transport(e.to_string()))?;
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| ToolSourceError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(ToolSourceError::Transport(format!("{status}: {text}")));
        }
        let parsed: SearchResponse = serde_json::from_str(&text)
            .map_err(|e| ToolSourceError::Transport(format!("bad response: {e}")))?;

        let mut lines = Vec::with_capacity(parsed.results.len());
        for (i, hit) in parsed.results.iter().enumerate() {
            lines.push(format!(
                "{}. {} ({})\n{}",
                i + 1,
                hit.title,
                hit.url,
                hit.content
            ));
        }
        if lines.is_empty() {
            lines.push("No results.".to_string());
        }
        Ok(ToolCallContent {
            text: lines.join("\n\n"),
        })
    }
}
