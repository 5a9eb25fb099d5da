//! State graph: nodes + routing, compile and invoke.
//!
//! Build with `StateGraph::add_node` / `add_edge`, then `compile()` to get a
//! `CompiledStateGraph`. Each node returns `Next` to continue the linear
//! order, jump to a node, or end. Every run is capped by a step budget.

mod compile_error;
mod compiled;
mod next;
mod node;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use next::Next;
pub use node::Node;
pub use state_graph::{StateGraph, DEFAULT_STEP_LIMIT};
