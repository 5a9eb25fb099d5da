//! OpenAI-compatible LLM client (Chat Completions API).
//!
//! Tool definitions from `ToolSpec` are attached to every request so the
//! model can emit tool calls; tool results in the transcript are rendered as
//! plain user turns ("Tool x returned: ...") rather than provider-specific
//! tool messages, keeping the client usable against any compatible endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::llm::{LlmClient, LlmError, LlmResponse};
use crate::message::Message;
use crate::state::ToolCall;
use crate::tool_source::ToolSpec;

/// OpenAI-compatible configuration.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key, usually from the `OPENAI_API_KEY` environment variable.
    pub api_key: String,
    /// Base URL, default `https://api.openai.com/v1`; works with compatible
    /// proxies (OpenRouter, local servers).
    pub base_url: String,
    /// Model id, e.g. `gpt-4o-mini`.
    pub model: String,
    /// Sampling temperature; the planner wants deterministic output.
    pub temperature: f32,
}

impl OpenAiConfig {
    /// Builds from environment: `OPENAI_API_KEY` required, `OPENAI_BASE_URL`
    /// and `OPENAI_MODEL` optional.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| LlmError::Auth("OPENAI_API_KEY not set".to_string()))?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            temperature: 0.0,
        })
    }
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

fn to_wire(messages: &[Message]) -> Vec<WireMessage> {
    messages
        .iter()
        .map(|m| match m {
            Message::System(c) => WireMessage {
                role: "system",
                content: c.clone(),
            },
            Message::Human(c) => WireMessage {
                role: "user",
                content: c.clone(),
            },
            Message::Assistant(c) => WireMessage {
                role: "assistant",
                content: c.clone(),
            },
            Message::Tool(r) => WireMessage {
                role: "user",
                content: format!("Tool {} returned: {}", r.name, r.content),
            },
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct RequestBody {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct WireToolFunction {
    name: String,
    /// JSON-encoded arguments string, per the Chat Completions format.
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct WireToolCall {
    id: Option<String>,
    function: WireToolFunction,
}

#[derive(Debug, Deserialize)]
struct MessageOut {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<WireToolCall>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageOut,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    choices: Vec<Choice>,
}

/// OpenAI-compatible client implementing `LlmClient`.
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: reqwest::Client,
    tools: Vec<Value>,
}

impl OpenAiClient {
    /// Builds a client from the given configuration, with no tools attached.
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            tools: Vec::new(),
        }
    }

    /// Builds from environment (needs `OPENAI_API_KEY`).
    pub fn from_env() -> Result<Self, LlmError> {
        OpenAiConfig::from_env().map(Self::new)
    }

    /// Attaches tool definitions so the model can request tool calls.
    pub fn with_tools(mut self, specs: &[ToolSpec]) -> Self {
        self.tools = specs
            .iter()
            .map(|s| {
                json!({
                    "type": "function",
                    "function": {
                        "name": s.name,
                        "description": s.description.clone().unwrap_or_default(),
                        "parameters": s.input_schema,
                    }
                })
            })
            .collect();
        self
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = RequestBody {
            model: self.config.model.clone(),
            messages: to_wire(messages),
            temperature: self.config.temperature,
            tools: self.tools.clone(),
        };
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 | 403 => LlmError::Auth(text),
                429 => LlmError::RateLimit(text),
                400..=499 => LlmError::InvalidRequest(text),
                _ => LlmError::ApiError(text),
            });
        }
        let parsed: ResponseBody =
            serde_json::from_str(&text).map_err(|e| LlmError::Parsing(format!("{e}: {text}")))?;
        let msg = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or_else(|| LlmError::Parsing("no choices in response".into()))?;
        let tool_calls = msg
            .tool_calls
            .into_iter()
            .map(|tc| ToolCall {
                name: tc.function.name,
                arguments: serde_json::from_str(&tc.function.arguments)
                    .unwrap_or_else(|_| json!({})),
                id: tc.id,
            })
            .collect();
        Ok(LlmResponse {
            content: msg.content.unwrap_or_default(),
            tool_calls,
        })
    }
}
