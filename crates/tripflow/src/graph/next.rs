//! Next-step result from a graph node.

/// Next step after running a node.
///
/// - **Continue**: follow the linear edge order (next node in chain, or end if last).
/// - **Node(id)**: jump to the given node (conditional edge).
/// - **End**: stop; return current state as final result.
///
/// Returned by `Node::run`; consumed by `CompiledStateGraph::invoke`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Next {
    /// Follow linear edge order; if the current node is last, equivalent to End.
    Continue,
    /// Run the node with the given id next.
    Node(String),
    /// Stop and return the current state.
    End,
}
