//! Scripted review channel for tests and the demo mode.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Decision, ReviewChannel, ReviewError, ReviewItem};

/// Review channel that replays a fixed sequence of decisions.
///
/// Pops one decision per checkpoint; an exhausted script is a channel error,
/// which makes a test fail loudly instead of looping.
pub struct ScriptedReview {
    decisions: Mutex<VecDeque<Decision>>,
}

impl ScriptedReview {
    /// Builds a channel that replays the given decisions in order.
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            decisions: Mutex::new(decisions.into_iter().collect()),
        }
    }

    /// A channel that approves every checkpoint.
    pub fn always_approve() -> Self {
        // 64 approvals outlasts any run within the default step budget.
        Self::new(std::iter::repeat(Decision::Approve).take(64))
    }
}

#[async_trait]
impl ReviewChannel for ScriptedReview {
    async fn decide(&self, _item: &ReviewItem) -> Result<Decision, ReviewError> {
        let mut q = self
            .decisions
            .lock()
            .map_err(|_| ReviewError::Closed("script poisoned".into()))?;
        q.pop_front()
            .ok_or_else(|| ReviewError::Closed("decision script exhausted".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_decisions_in_order() {
        let review = ScriptedReview::new([Decision::Approve, Decision::Replan, Decision::Reject]);
        let item = ReviewItem::AgentReply("x".into());
        assert_eq!(review.decide(&item).await.unwrap(), Decision::Approve);
        assert_eq!(review.decide(&item).await.unwrap(), Decision::Replan);
        assert_eq!(review.decide(&item).await.unwrap(), Decision::Reject);
        assert!(review.decide(&item).await.is_err());
    }
}
