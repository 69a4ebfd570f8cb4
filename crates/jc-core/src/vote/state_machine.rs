//! Vote widget phase machine.
//!
//! Defines a pure state transition function for one widget's interaction
//! cycle. Network calls and DOM updates are side effects described by
//! [`VoteAction`] values and executed by the application layer (jc-app).

use serde::{Deserialize, Serialize};

use super::direction::VoteDirection;
use super::state::VoteState;

/// Runtime phase of one vote widget.
///
/// 单个投票组件的运行阶段。
///
/// State transitions:
/// ```text
///   Settled(s)
///    │ Activate(d)          s.accepts(d)
///    ▼
///   AwaitingServer { prior: s, direction: d }
///    ├── ServerConfirmed { score } ─► Settled(s.toggled(d))   (score committed)
///    └── ServerFailed ─────────────► Settled(s)               (unchanged)
///
/// Global（全局规则）:
///   Settled(s) + Activate(d), !s.accepts(d)  ─► dropped（对向投票需先撤销）
///   AwaitingServer + Activate(_)             ─► dropped（请求在途，丢弃点击）
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetPhase {
    /// Idle and interactive; holds the last server-confirmed vote state.
    Settled(VoteState),

    /// A toggle request is in flight. Further activations are dropped until
    /// the response arrives; `prior` is what the indicators still show.
    AwaitingServer {
        prior: VoteState,
        direction: VoteDirection,
    },
}

impl WidgetPhase {
    /// The vote state the indicators currently render.
    ///
    /// While a request is in flight nothing has changed visually, so the
    /// prior state is still the displayed one.
    pub fn displayed_vote(&self) -> VoteState {
        match self {
            Self::Settled(state) => *state,
            Self::AwaitingServer { prior, .. } => *prior,
        }
    }

    /// Check whether a toggle request is in flight.
    pub fn is_awaiting_server(&self) -> bool {
        matches!(self, Self::AwaitingServer { .. })
    }
}

impl Default for WidgetPhase {
    fn default() -> Self {
        Self::Settled(VoteState::None)
    }
}

/// Events that drive one widget's interaction cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteEvent {
    /// User clicked the indicator for `direction`.
    Activate(VoteDirection),

    /// The in-flight toggle succeeded; `score` is the server's new
    /// aggregate, to be committed wholesale.
    ServerConfirmed { score: i64 },

    /// The in-flight toggle failed (network error or non-success status).
    ServerFailed,
}

/// Side-effects produced by phase transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteAction {
    /// Issue a vote-toggle request to the server.
    SendToggle { direction: VoteDirection },

    /// Overwrite the displayed score with the server's value.
    CommitScore { score: i64 },
}

/// Pure phase machine: no side effects.
///
/// 纯状态机：不包含副作用。
pub struct VoteStateMachine;

impl VoteStateMachine {
    pub fn transition(phase: WidgetPhase, event: VoteEvent) -> (WidgetPhase, Vec<VoteAction>) {
        match (phase, event) {
            (WidgetPhase::Settled(state), VoteEvent::Activate(direction)) => {
                if !state.accepts(direction) {
                    // Opposing vote is active; the user must clear it first.
                    return (WidgetPhase::Settled(state), Vec::new());
                }
                (
                    WidgetPhase::AwaitingServer {
                        prior: state,
                        direction,
                    },
                    vec![VoteAction::SendToggle { direction }],
                )
            }
            (WidgetPhase::AwaitingServer { prior, direction }, VoteEvent::ServerConfirmed { score }) => (
                WidgetPhase::Settled(prior.toggled(direction)),
                vec![VoteAction::CommitScore { score }],
            ),
            (WidgetPhase::AwaitingServer { prior, .. }, VoteEvent::ServerFailed) => {
                // No retry and no visual change; the indicators never left
                // their prior state.
                (WidgetPhase::Settled(prior), Vec::new())
            }
            // In-flight guard: clicks during the round trip are dropped, and
            // server events without a pending request are stale.
            (phase, _event) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(?phase, event = ?_event, "vote event dropped");
                (phase, Vec::new())
            }
        }
    }
}
