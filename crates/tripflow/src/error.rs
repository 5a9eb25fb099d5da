//! Workflow execution errors.
//!
//! Recoverable failures (LLM call, tool call) never surface here: nodes fold
//! them into the transcript and the run continues to the next checkpoint.
//! `WorkflowError` is what actually aborts a run.

use thiserror::Error;

/// Hard failure while running a workflow graph.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A node could not run at all (e.g. broken review channel, unknown jump target).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
    /// The per-run transition budget was spent; indicates runaway looping.
    #[error("step limit exceeded: {0}")]
    StepLimitExceeded(usize),
}
