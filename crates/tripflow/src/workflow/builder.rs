//! Workflow assembly: explicit configuration in, compiled graph out.
//!
//! All capabilities are passed in here; nothing in the workflow reaches for
//! globals. The builder wires the four nodes, sets the replan ceiling and
//! step budget, and compiles the graph.

use std::sync::Arc;

use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, DEFAULT_STEP_LIMIT};
use crate::error::WorkflowError;
use crate::llm::LlmClient;
use crate::review::ReviewChannel;
use crate::state::WorkflowState;
use crate::tool_source::ToolSource;

use super::agent_node::AgentNode;
use super::replan_node::ReplanNode;
use super::review_node::ReviewNode;
use super::tools_node::ToolsNode;
use super::{AGENT, REPLAN, REVIEW, TOOLS};

/// Default replan ceiling: three corrective plans per run.
pub const DEFAULT_MAX_REPLANS: u32 = 3;

/// Builder for a `ReplanWorkflow`.
///
/// Takes the three capabilities (LLM, tools, review channel) plus optional
/// overrides for prompts, the replan ceiling, and the step budget.
pub struct WorkflowBuilder {
    llm: Arc<dyn LlmClient>,
    tools: Arc<dyn ToolSource>,
    review: Arc<dyn ReviewChannel>,
    max_replans: u32,
    step_limit: usize,
    agent_prompt: Option<String>,
    replan_prompt: Option<String>,
}

impl WorkflowBuilder {
    /// Starts a builder from the three capabilities. The LLM is shared by the
    /// agent and replan nodes; they differ only in system prompt.
    pub fn new(
        llm: Arc<dyn LlmClient>,
        tools: Arc<dyn ToolSource>,
        review: Arc<dyn ReviewChannel>,
    ) -> Self {
        Self {
            llm,
            tools,
            review,
            max_replans: DEFAULT_MAX_REPLANS,
            step_limit: DEFAULT_STEP_LIMIT,
            agent_prompt: None,
            replan_prompt: None,
        }
    }

    /// Overrides the replan ceiling.
    pub fn with_max_replans(mut self, n: u32) -> Self {
        self.max_replans = n;
        self
    }

    /// Overrides the per-run transition budget.
    pub fn with_step_limit(mut self, n: usize) -> Self {
        self.step_limit = n;
        self
    }

    /// Overrides the agent system prompt.
    pub fn with_agent_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.agent_prompt = Some(prompt.into());
        self
    }

    /// Overrides the replanner system prompt.
    pub fn with_replan_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.replan_prompt = Some(prompt.into());
        self
    }

    /// Wires the nodes and compiles the graph.
    pub fn build(self) -> Result<ReplanWorkflow, CompilationError> {
        let mut agent = AgentNode::new(self.llm.clone());
        if let Some(p) = self.agent_prompt {
            agent = agent.with_system_prompt(p);
        }
        let mut replan = ReplanNode::new(self.llm.clone());
        if let Some(p) = self.replan_prompt {
            replan = replan.with_system_prompt(p);
        }

        let mut graph = StateGraph::new().with_step_limit(self.step_limit);
        graph
            .add_node(AGENT, Box::new(agent))
            .add_node(REVIEW, Box::new(ReviewNode::new(self.review, self.max_replans)))
            .add_node(TOOLS, Box::new(ToolsNode::new(self.tools)))
            .add_node(REPLAN, Box::new(replan))
            .add_edge(AGENT);

        Ok(ReplanWorkflow {
            graph: graph.compile()?,
        })
    }
}

/// A compiled replanning workflow, ready to run.
pub struct ReplanWorkflow {
    graph: CompiledStateGraph<WorkflowState>,
}

impl ReplanWorkflow {
    /// Runs one turn-taking session for the given user request and returns
    /// the final state (transcript + outcome).
    ///
    /// LLM and tool failures are folded into the transcript; the only hard
    /// errors are a broken review channel and step-budget exhaustion.
    pub async fn run(&self, user_request: impl Into<String>) -> Result<WorkflowState, WorkflowError> {
        self.graph.invoke(WorkflowState::new(user_request)).await
    }

    /// Runs the graph from an existing state. Useful when the caller builds
    /// the initial transcript itself.
    pub async fn invoke(&self, state: WorkflowState) -> Result<WorkflowState, WorkflowError> {
        self.graph.invoke(state).await
    }
}
