use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use jc_core::ports::{IndicatorViewPort, VoteTransportPort};
use jc_core::vote::state_machine::{VoteAction, VoteEvent, VoteStateMachine, WidgetPhase};
use jc_core::vote::{PostSnapshot, VotableItem, VoteDirection, VoteState, WidgetView};
use jc_core::PostId;

/// Per-item vote widget view model.
///
/// 单项投票组件的视图模型。Owns the item's server-confirmed state plus the
/// interaction phase and keeps both synchronized with the server: exactly
/// one toggle request per accepted activation, state committed only from
/// the server's response, indicators re-rendered through the view port.
pub struct VoteWidget {
    cell: Mutex<WidgetCell>,
    transport: Arc<dyn VoteTransportPort>,
    view: Arc<dyn IndicatorViewPort>,
}

struct WidgetCell {
    item: VotableItem,
    phase: WidgetPhase,
}

impl VoteWidget {
    pub fn new(
        snapshot: PostSnapshot,
        transport: Arc<dyn VoteTransportPort>,
        view: Arc<dyn IndicatorViewPort>,
    ) -> Self {
        let item = VotableItem::from_snapshot(snapshot);
        let phase = WidgetPhase::Settled(item.vote);
        Self {
            cell: Mutex::new(WidgetCell { item, phase }),
            transport,
            view,
        }
    }

    /// Handle a user activation of the indicator for `direction`.
    ///
    /// Runs the full cycle: phase transition, toggle request, server
    /// reconciliation, re-render. Activations the phase machine drops
    /// (opposing vote active, request already in flight) return without
    /// touching the network.
    pub async fn activate(&self, direction: VoteDirection) -> anyhow::Result<()> {
        let post_pk = {
            let mut cell = self.cell.lock().await;
            let (phase, actions) =
                VoteStateMachine::transition(cell.phase.clone(), VoteEvent::Activate(direction));
            cell.phase = phase;
            if !actions
                .iter()
                .any(|a| matches!(a, VoteAction::SendToggle { .. }))
            {
                debug!(post_pk = %cell.item.id, %direction, "activation dropped");
                return Ok(());
            }
            cell.item.id.clone()
        };

        // Suspension point: the lock is not held across the round trip, but
        // the AwaitingServer phase keeps further activations out.
        let outcome = self.transport.toggle(&post_pk, direction).await;

        let mut cell = self.cell.lock().await;
        match outcome {
            Ok(receipt) => {
                let (phase, actions) = VoteStateMachine::transition(
                    cell.phase.clone(),
                    VoteEvent::ServerConfirmed {
                        score: receipt.score,
                    },
                );
                cell.phase = phase;
                for action in actions {
                    if let VoteAction::CommitScore { score } = action {
                        cell.item.score = score;
                    }
                }
                if let WidgetPhase::Settled(vote) = cell.phase {
                    cell.item.vote = vote;
                }
                let view = WidgetView::project(&cell.item);
                debug!(post_pk = %post_pk, vote = ?cell.item.vote, score = cell.item.score, "vote reconciled");
                drop(cell);
                self.view.apply(&view).await
            }
            Err(err) => {
                let (phase, _actions) =
                    VoteStateMachine::transition(cell.phase.clone(), VoteEvent::ServerFailed);
                cell.phase = phase;
                warn!(post_pk = %post_pk, %direction, error = %err, "vote toggle failed, state unchanged");
                drop(cell);
                self.view.flash_failure(&post_pk).await
            }
        }
    }

    /// The server-confirmed vote state the indicators currently show.
    pub async fn current_vote(&self) -> VoteState {
        self.cell.lock().await.phase.displayed_vote()
    }

    /// The last score the server returned.
    pub async fn score(&self) -> i64 {
        self.cell.lock().await.item.score
    }

    pub async fn phase(&self) -> WidgetPhase {
        self.cell.lock().await.phase.clone()
    }

    /// Current rendering, e.g. for an initial hydration pass.
    pub async fn render(&self) -> WidgetView {
        WidgetView::project(&self.cell.lock().await.item)
    }

    pub async fn post_pk(&self) -> PostId {
        self.cell.lock().await.item.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jc_core::ports::{VoteReceipt, VoteTransportError};
    use std::sync::Mutex as StdMutex;

    struct MockTransport {
        responses: StdMutex<Vec<Result<VoteReceipt, VoteTransportError>>>,
        calls: StdMutex<Vec<(PostId, VoteDirection)>>,
    }

    impl MockTransport {
        fn new(responses: Vec<Result<VoteReceipt, VoteTransportError>>) -> Self {
            Self {
                responses: StdMutex::new(responses),
                calls: StdMutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl VoteTransportPort for MockTransport {
        async fn toggle(
            &self,
            post_pk: &PostId,
            direction: VoteDirection,
        ) -> Result<VoteReceipt, VoteTransportError> {
            self.calls
                .lock()
                .unwrap()
                .push((post_pk.clone(), direction));
            self.responses.lock().unwrap().remove(0)
        }
    }

    struct RecordingView {
        applied: StdMutex<Vec<WidgetView>>,
        failures: StdMutex<Vec<PostId>>,
    }

    impl RecordingView {
        fn new() -> Self {
            Self {
                applied: StdMutex::new(Vec::new()),
                failures: StdMutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl IndicatorViewPort for RecordingView {
        async fn apply(&self, view: &WidgetView) -> anyhow::Result<()> {
            self.applied.lock().unwrap().push(view.clone());
            Ok(())
        }

        async fn flash_failure(&self, post_pk: &PostId) -> anyhow::Result<()> {
            self.failures.lock().unwrap().push(post_pk.clone());
            Ok(())
        }
    }

    fn snapshot(vote: VoteState, score: i64) -> PostSnapshot {
        PostSnapshot {
            post_pk: PostId::from("7"),
            vote,
            score,
        }
    }

    #[tokio::test]
    async fn upvote_from_none_commits_server_score_and_renders() {
        let transport = Arc::new(MockTransport::new(vec![Ok(VoteReceipt { score: 11 })]));
        let view = Arc::new(RecordingView::new());
        let widget = VoteWidget::new(snapshot(VoteState::None, 10), transport.clone(), view.clone());

        widget.activate(VoteDirection::Up).await.unwrap();

        assert_eq!(widget.current_vote().await, VoteState::Upvoted);
        assert_eq!(widget.score().await, 11);
        assert_eq!(transport.call_count(), 1);

        let applied = view.applied.lock().unwrap();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].score_text, "11");
        assert!(applied[0].up.active);
        assert!(!applied[0].down.active, "down indicator forced neutral");
    }

    #[tokio::test]
    async fn second_upvote_clears_the_vote() {
        let transport = Arc::new(MockTransport::new(vec![Ok(VoteReceipt { score: 10 })]));
        let view = Arc::new(RecordingView::new());
        let widget =
            VoteWidget::new(snapshot(VoteState::Upvoted, 11), transport, view.clone());

        widget.activate(VoteDirection::Up).await.unwrap();

        assert_eq!(widget.current_vote().await, VoteState::None);
        assert_eq!(widget.score().await, 10);
        let applied = view.applied.lock().unwrap();
        assert_eq!(applied[0].score_text, "10");
        assert!(!applied[0].up.active);
    }

    #[tokio::test]
    async fn downvote_while_upvoted_sends_no_request() {
        let transport = Arc::new(MockTransport::new(vec![]));
        let view = Arc::new(RecordingView::new());
        let widget = VoteWidget::new(
            snapshot(VoteState::Upvoted, 11),
            transport.clone(),
            view.clone(),
        );

        widget.activate(VoteDirection::Down).await.unwrap();

        assert_eq!(transport.call_count(), 0);
        assert_eq!(widget.current_vote().await, VoteState::Upvoted);
        assert!(view.applied.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_leaves_state_and_score_unchanged() {
        let transport = Arc::new(MockTransport::new(vec![Err(VoteTransportError::Network(
            "connection refused".to_string(),
        ))]));
        let view = Arc::new(RecordingView::new());
        let widget = VoteWidget::new(
            snapshot(VoteState::None, 10),
            transport.clone(),
            view.clone(),
        );

        widget.activate(VoteDirection::Up).await.unwrap();

        assert_eq!(widget.current_vote().await, VoteState::None);
        assert_eq!(widget.score().await, 10);
        assert!(view.applied.lock().unwrap().is_empty());
        assert_eq!(
            view.failures.lock().unwrap().as_slice(),
            &[PostId::from("7")]
        );
    }

    #[tokio::test]
    async fn score_is_overwritten_wholesale() {
        let transport = Arc::new(MockTransport::new(vec![Ok(VoteReceipt { score: 42 })]));
        let view = Arc::new(RecordingView::new());
        let widget = VoteWidget::new(snapshot(VoteState::None, 999), transport, view.clone());

        widget.activate(VoteDirection::Down).await.unwrap();

        assert_eq!(widget.score().await, 42);
        assert_eq!(view.applied.lock().unwrap()[0].score_text, "42");
    }
}
