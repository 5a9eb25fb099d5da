//! Replanning workflow controller: state-in, state-out.
//!
//! A small state-graph engine (`graph`) plus one workflow built on it
//! (`workflow`): an agent loop where every tool request passes a mandatory
//! human checkpoint, and the human can grant a bounded number of replans.
//! Capabilities (LLM, tools, the human decision channel) are trait objects
//! passed in through `WorkflowBuilder`; mocks for all three live in this
//! crate for tests and the demo mode.

pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod review;
pub mod state;
pub mod tool_source;
pub mod workflow;

pub use error::WorkflowError;
pub use graph::{CompilationError, CompiledStateGraph, Next, Node, StateGraph, DEFAULT_STEP_LIMIT};
pub use llm::{LlmClient, LlmError, LlmResponse, MockLlm};
#[cfg(feature = "openai")]
pub use llm::{OpenAiClient, OpenAiConfig};
pub use message::Message;
pub use review::{Decision, ReviewChannel, ReviewError, ReviewItem, ScriptedReview};
pub use state::{Outcome, ToolCall, ToolResult, WorkflowState};
pub use tool_source::{MockToolSource, ToolCallContent, ToolSource, ToolSourceError, ToolSpec};
#[cfg(feature = "tavily")]
pub use tool_source::TavilySearch;
pub use workflow::{ReplanWorkflow, WorkflowBuilder, DEFAULT_MAX_REPLANS};
