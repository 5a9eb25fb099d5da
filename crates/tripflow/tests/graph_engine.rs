//! Integration tests for the state graph engine: compile validation, routing,
//! step budget.

use async_trait::async_trait;
use tripflow::{CompilationError, Next, Node, StateGraph, WorkflowError};

#[derive(Debug, Clone, Default)]
struct CountState {
    visits: Vec<String>,
}

/// Records its id and returns a fixed `Next`.
struct RouteNode {
    id: String,
    next: Next,
}

impl RouteNode {
    fn new(id: &str, next: Next) -> Self {
        Self {
            id: id.to_string(),
            next,
        }
    }
}

#[async_trait]
impl Node<CountState> for RouteNode {
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&self, state: CountState) -> Result<(CountState, Next), WorkflowError> {
        let mut state = state;
        state.visits.push(self.id.clone());
        Ok((state, self.next.clone()))
    }
}

#[tokio::test]
async fn compile_fails_when_edge_refers_to_unknown_node() {
    let mut graph = StateGraph::<CountState>::new();
    graph.add_node("a", Box::new(RouteNode::new("a", Next::Continue)));
    graph.add_edge("a");
    graph.add_edge("missing");

    match graph.compile() {
        Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "missing"),
        _ => panic!("expected NodeNotFound"),
    }
}

#[tokio::test]
async fn invoke_follows_linear_chain_then_stops() {
    let mut graph = StateGraph::<CountState>::new();
    graph
        .add_node("a", Box::new(RouteNode::new("a", Next::Continue)))
        .add_node("b", Box::new(RouteNode::new("b", Next::Continue)))
        .add_edge("a")
        .add_edge("b");

    let state = graph
        .compile()
        .unwrap()
        .invoke(CountState::default())
        .await
        .unwrap();
    assert_eq!(state.visits, vec!["a", "b"]);
}

#[tokio::test]
async fn invoke_follows_jump_and_end() {
    let mut graph = StateGraph::<CountState>::new();
    graph
        .add_node("a", Box::new(RouteNode::new("a", Next::Node("c".into()))))
        .add_node("b", Box::new(RouteNode::new("b", Next::Continue)))
        .add_node("c", Box::new(RouteNode::new("c", Next::End)))
        .add_edge("a")
        .add_edge("b");

    let state = graph
        .compile()
        .unwrap()
        .invoke(CountState::default())
        .await
        .unwrap();
    // b is skipped: a jumps straight to c, which ends the run.
    assert_eq!(state.visits, vec!["a", "c"]);
}

#[tokio::test]
async fn jump_to_unknown_node_is_an_error_not_a_panic() {
    let mut graph = StateGraph::<CountState>::new();
    graph
        .add_node("a", Box::new(RouteNode::new("a", Next::Node("ghost".into()))))
        .add_edge("a");

    let err = graph
        .compile()
        .unwrap()
        .invoke(CountState::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::ExecutionFailed(m) if m.contains("ghost")));
}

#[tokio::test]
async fn self_loop_exhausts_step_budget() {
    let mut graph = StateGraph::<CountState>::new().with_step_limit(5);
    graph
        .add_node("a", Box::new(RouteNode::new("a", Next::Node("a".into()))))
        .add_edge("a");

    let err = graph
        .compile()
        .unwrap()
        .invoke(CountState::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::StepLimitExceeded(5)));
}

#[tokio::test]
async fn empty_graph_is_an_execution_error() {
    let graph = StateGraph::<CountState>::new();
    let err = graph
        .compile()
        .unwrap()
        .invoke(CountState::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::ExecutionFailed(m) if m.contains("empty")));
}
