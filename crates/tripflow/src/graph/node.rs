//! Graph node trait: one step in a StateGraph.

use async_trait::async_trait;

use crate::error::WorkflowError;

use super::Next;

/// One step in a graph: state in, (state out, next step).
///
/// The runner uses the returned `Next` to choose the next node (Continue =
/// linear order, Node(id) = jump, End = stop). Recoverable capability failures
/// should be folded into the state, not returned as `Err`; an `Err` aborts
/// the whole run.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
{
    /// Node id (e.g. `"agent"`, `"tools"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, (state out, next step).
    async fn run(&self, state: S) -> Result<(S, Next), WorkflowError>;
}
