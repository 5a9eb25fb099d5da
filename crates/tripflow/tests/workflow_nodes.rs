//! Unit tests for the workflow nodes, each fed a hand-built state.

use std::sync::Arc;

use serde_json::json;
use tripflow::workflow::{AgentNode, ReplanNode, ReviewNode, ToolsNode, AGENT, REPLAN, REVIEW, TOOLS};
use tripflow::{
    Decision, Message, MockLlm, MockToolSource, Next, Node, Outcome, ScriptedReview, ToolCall,
    WorkflowState,
};

fn pending_search(state: &mut WorkflowState) {
    state.pending_calls.push(ToolCall {
        name: "web_search".into(),
        arguments: json!({"query": "hotels in Berlin"}),
        id: Some("c1".into()),
    });
}

// --- AgentNode ---

#[tokio::test]
async fn agent_node_with_tool_calls_routes_to_review() {
    let node = AgentNode::new(Arc::new(MockLlm::search_then_answer("q", "a")));
    let state = WorkflowState::new("Plan a trip.");
    let (out, next) = node.run(state).await.unwrap();

    assert_eq!(next, Next::Node(REVIEW.to_string()));
    assert_eq!(out.pending_calls.len(), 1);
    assert!(matches!(out.messages.last(), Some(Message::Assistant(_))));
    assert_eq!(out.outcome, None);
}

#[tokio::test]
async fn agent_node_direct_answer_ends_with_outcome() {
    let node = AgentNode::new(Arc::new(MockLlm::answering("done")));
    let (out, next) = node.run(WorkflowState::new("q")).await.unwrap();

    assert_eq!(next, Next::End);
    assert_eq!(out.outcome, Some(Outcome::Answered));
    assert_eq!(out.final_answer(), Some("done"));
}

#[tokio::test]
async fn agent_node_id_is_agent() {
    let node = AgentNode::new(Arc::new(MockLlm::answering("x")));
    assert_eq!(node.id(), AGENT);
}

// --- ReviewNode ---

#[tokio::test]
async fn review_node_approve_routes_to_tools_and_keeps_pending_calls() {
    let node = ReviewNode::new(Arc::new(ScriptedReview::new([Decision::Approve])), 3);
    let mut state = WorkflowState::new("q");
    pending_search(&mut state);

    let (out, next) = node.run(state).await.unwrap();
    assert_eq!(next, Next::Node(TOOLS.to_string()));
    assert_eq!(out.pending_calls.len(), 1);
    assert!(matches!(
        out.messages.last(),
        Some(Message::Human(c)) if c == "User approved the step."
    ));
}

#[tokio::test]
async fn review_node_reject_ends_and_drops_pending_calls() {
    let node = ReviewNode::new(Arc::new(ScriptedReview::new([Decision::Reject])), 3);
    let mut state = WorkflowState::new("q");
    pending_search(&mut state);

    let (out, next) = node.run(state).await.unwrap();
    assert_eq!(next, Next::End);
    assert!(out.pending_calls.is_empty());
    assert_eq!(out.outcome, Some(Outcome::Rejected));
}

#[tokio::test]
async fn review_node_replan_increments_counter() {
    let node = ReviewNode::new(Arc::new(ScriptedReview::new([Decision::Replan])), 3);
    let mut state = WorkflowState::new("q");
    pending_search(&mut state);
    state.replan_count = 1;

    let (out, next) = node.run(state).await.unwrap();
    assert_eq!(next, Next::Node(REPLAN.to_string()));
    assert_eq!(out.replan_count, 2);
    assert!(out.pending_calls.is_empty());
    assert_eq!(out.outcome, None);
}

#[tokio::test]
async fn review_node_replan_at_ceiling_ends_without_incrementing() {
    let node = ReviewNode::new(Arc::new(ScriptedReview::new([Decision::Replan])), 3);
    let mut state = WorkflowState::new("q");
    pending_search(&mut state);
    state.replan_count = 3;

    let (out, next) = node.run(state).await.unwrap();
    assert_eq!(next, Next::End);
    assert_eq!(out.replan_count, 3);
    assert_eq!(out.outcome, Some(Outcome::ReplanBudgetExhausted));
}

#[tokio::test]
async fn review_node_exhausted_channel_is_a_hard_error() {
    let node = ReviewNode::new(Arc::new(ScriptedReview::new([])), 3);
    let mut state = WorkflowState::new("q");
    pending_search(&mut state);

    assert!(node.run(state).await.is_err());
}

// --- ToolsNode ---

#[tokio::test]
async fn tools_node_executes_all_pending_calls_and_returns_to_agent() {
    let node = ToolsNode::new(Arc::new(MockToolSource::web_search_example()));
    let mut state = WorkflowState::new("q");
    pending_search(&mut state);

    let (out, next) = node.run(state).await.unwrap();
    assert_eq!(next, Next::Node(AGENT.to_string()));
    assert!(out.pending_calls.is_empty());
    assert!(matches!(
        out.messages.last(),
        Some(Message::Tool(r)) if r.name == "web_search" && !r.is_error
    ));
}

#[tokio::test]
async fn tools_node_is_deterministic_for_identical_input() {
    let source = Arc::new(MockToolSource::web_search_example());
    let mut state = WorkflowState::new("q");
    pending_search(&mut state);

    let (a, _) = ToolsNode::new(source.clone()).run(state.clone()).await.unwrap();
    let (b, _) = ToolsNode::new(source).run(state).await.unwrap();
    assert_eq!(
        serde_json::to_string(&a.messages).unwrap(),
        serde_json::to_string(&b.messages).unwrap()
    );
}

#[tokio::test]
async fn tools_node_unknown_tool_yields_error_result() {
    let node = ToolsNode::new(Arc::new(MockToolSource::new()));
    let mut state = WorkflowState::new("q");
    pending_search(&mut state);

    let (out, _) = node.run(state).await.unwrap();
    assert!(matches!(
        out.messages.last(),
        Some(Message::Tool(r)) if r.is_error && r.content.contains("web_search")
    ));
}

// --- ReplanNode ---

#[tokio::test]
async fn replan_node_appends_plan_and_returns_to_agent() {
    let node = ReplanNode::new(Arc::new(MockLlm::answering(
        "Search for hotels before flights.",
    )));
    let state = WorkflowState::new("q");

    let (out, next) = node.run(state).await.unwrap();
    assert_eq!(next, Next::Node(AGENT.to_string()));
    assert!(matches!(
        out.messages.last(),
        Some(Message::Assistant(c)) if c == "Search for hotels before flights."
    ));
}

#[tokio::test]
async fn replan_node_discards_tool_calls_from_the_planner() {
    // A replanner that misbehaves and asks for tools: the plan text is kept,
    // the calls are not.
    let node = ReplanNode::new(Arc::new(MockLlm::search_then_answer("q", "unused")));
    let (out, _) = node.run(WorkflowState::new("q")).await.unwrap();
    assert!(out.pending_calls.is_empty());
}
