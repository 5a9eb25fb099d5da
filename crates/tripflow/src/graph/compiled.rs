//! Compiled state graph: immutable, supports invoke only.

use std::collections::HashMap;

use crate::error::WorkflowError;

use super::Next;
use super::Node;

/// Compiled graph: immutable structure, supports invoke only.
///
/// Created by `StateGraph::compile()`. Runs from the first node in edge order;
/// uses each node's returned `Next` to choose the next node (Continue = linear
/// order, Node(id) = jump, End = stop). Aborts with `StepLimitExceeded` when
/// the transition budget is spent.
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Box<dyn Node<S>>>,
    pub(super) edge_order: Vec<String>,
    pub(super) step_limit: usize,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Runs the graph with the given state until a node returns `Next::End`
    /// or the linear chain runs out.
    ///
    /// Each node execution counts as one step against the budget; exceeding
    /// the budget is a hard abort, not a truncated result.
    pub async fn invoke(&self, state: S) -> Result<S, WorkflowError> {
        let mut state = state;
        let mut current_id = self
            .edge_order
            .first()
            .cloned()
            .ok_or_else(|| WorkflowError::ExecutionFailed("empty graph".into()))?;
        let mut steps = 0usize;

        loop {
            if steps >= self.step_limit {
                return Err(WorkflowError::StepLimitExceeded(self.step_limit));
            }
            steps += 1;

            let node = self.nodes.get(&current_id).ok_or_else(|| {
                WorkflowError::ExecutionFailed(format!("unknown node: {current_id}"))
            })?;
            tracing::debug!(node = %current_id, step = steps, "running node");
            let (new_state, next) = node.run(state).await?;
            state = new_state;

            match next {
                Next::End => return Ok(state),
                Next::Node(id) => current_id = id,
                Next::Continue => {
                    let pos = self
                        .edge_order
                        .iter()
                        .position(|x| x == &current_id)
                        .ok_or_else(|| {
                            WorkflowError::ExecutionFailed(format!(
                                "node {current_id} not in edge order"
                            ))
                        })?;
                    let next_pos = pos + 1;
                    if next_pos >= self.edge_order.len() {
                        return Ok(state);
                    }
                    current_id = self.edge_order[next_pos].clone();
                }
            }
        }
    }
}
