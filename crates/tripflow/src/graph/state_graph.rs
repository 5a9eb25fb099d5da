//! State graph builder: nodes, edge order, step budget.

use std::collections::HashMap;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledStateGraph;
use crate::graph::node::Node;

/// Default per-run transition budget. Generous for a checkpointed loop;
/// exceeding it means the graph is cycling instead of converging.
pub const DEFAULT_STEP_LIMIT: usize = 50;

/// State graph: nodes plus linear edge order and a step budget.
///
/// Generic over state type `S`. Build with `add_node` / `add_edge`, then
/// `compile()` to obtain an executable graph. Conditional routing happens at
/// run time through each node's returned `Next`.
pub struct StateGraph<S> {
    nodes: HashMap<String, Box<dyn Node<S>>>,
    /// Linear chain: [id1, id2, ...] => START -> id1 -> id2 -> ... -> END
    edge_order: Vec<String>,
    step_limit: usize,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates an empty graph with the default step budget.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edge_order: Vec::new(),
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// Overrides the per-run transition budget.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = limit;
        self
    }

    /// Adds a node; id must be unique. Replaces if same id.
    ///
    /// Returns `&mut Self` for method chaining. Use `add_edge` to include the
    /// node in the chain; nodes reached only via `Next::Node(id)` jumps must
    /// still be registered here.
    pub fn add_node(&mut self, id: impl Into<String>, node: Box<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Appends an edge from the current chain end to this node.
    ///
    /// Order of `add_edge` calls defines the chain: first is START→id. The
    /// given id must be registered via `add_node` before `compile()`.
    pub fn add_edge(&mut self, to_id: impl Into<String>) -> &mut Self {
        self.edge_order.push(to_id.into());
        self
    }

    /// Builds the executable graph: validates that all edge targets are registered nodes.
    ///
    /// Returns `CompilationError::NodeNotFound(id)` if any id in the edge
    /// order is not in the node map. On success the graph is immutable and
    /// ready for `invoke`.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        for id in &self.edge_order {
            if !self.nodes.contains_key(id) {
                return Err(CompilationError::NodeNotFound(id.clone()));
            }
        }
        Ok(CompiledStateGraph {
            nodes: self.nodes,
            edge_order: self.edge_order,
            step_limit: self.step_limit,
        })
    }
}
