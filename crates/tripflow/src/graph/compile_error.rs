//! Graph compilation error.

use thiserror::Error;

/// Error when compiling a state graph.
///
/// Returned by `StateGraph::compile()`. Validation ensures every id in the
/// edge order exists in the node map.
#[derive(Debug, Error)]
pub enum CompilationError {
    /// A node id in the edge chain was not registered via `add_node`.
    #[error("node not found: {0}")]
    NodeNotFound(String),
}
