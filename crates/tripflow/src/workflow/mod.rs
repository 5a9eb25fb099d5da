//! The replanning workflow: agent → human checkpoint → tools, with bounded replans.
//!
//! Four nodes over `WorkflowState`:
//! - `agent`: one reasoning step; emits an answer or tool requests.
//! - `review`: mandatory human checkpoint; approve / reject / replan.
//! - `tools`: executes every pending call, appends results, returns to agent.
//! - `replan`: asks for a one-sentence revised plan, returns to agent.
//!
//! Routing lives in `router` as pure functions; `WorkflowBuilder` wires the
//! nodes into a `StateGraph` from an explicit set of capabilities.

mod agent_node;
mod builder;
mod replan_node;
mod review_node;
mod router;
mod tools_node;

pub use agent_node::{AgentNode, DEFAULT_AGENT_PROMPT};
pub use builder::{ReplanWorkflow, WorkflowBuilder, DEFAULT_MAX_REPLANS};
pub use replan_node::{ReplanNode, DEFAULT_REPLAN_PROMPT};
pub use review_node::ReviewNode;
pub use router::{route_after_agent, route_decision};
pub use tools_node::ToolsNode;

/// Node id of the agent reasoning step.
pub const AGENT: &str = "agent";
/// Node id of the human checkpoint.
pub const REVIEW: &str = "review";
/// Node id of the tool-execution step.
pub const TOOLS: &str = "tools";
/// Node id of the replanning step.
pub const REPLAN: &str = "replan";
