use serde::{Deserialize, Serialize};

use super::direction::VoteDirection;

/// The authenticated user's vote on a single item, as last confirmed by the
/// server.
///
/// Design principle: this is a single enum value, so `Upvoted` and
/// `Downvoted` are mutually exclusive by construction. It is mutated only
/// after a successful server round trip; the DOM indicator classes are a
/// rendering of this value and never the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteState {
    /// No vote cast.
    None,

    /// The user's upvote is active.
    Upvoted,

    /// The user's downvote is active.
    Downvoted,
}

impl VoteState {
    /// Check whether `direction`'s indicator is the active one.
    pub fn is_active(self, direction: VoteDirection) -> bool {
        matches!(
            (self, direction),
            (Self::Upvoted, VoteDirection::Up) | (Self::Downvoted, VoteDirection::Down)
        )
    }

    /// Check whether an activation in `direction` may proceed.
    ///
    /// 仅允许从中立状态投票，或撤销自己方向的投票。A click on the opposing
    /// indicator while the other vote is active is not a legal transition;
    /// the user must first clear the existing vote.
    pub fn accepts(self, direction: VoteDirection) -> bool {
        self == Self::None || self.is_active(direction)
    }

    /// The state reached after the server confirms a toggle in `direction`.
    ///
    /// The endpoint is a toggle, not a one-way set: toggling the active
    /// direction clears the vote, toggling from neutral casts it. Callers
    /// must have checked [`accepts`](Self::accepts) first; toggling the
    /// opposing direction is a no-op.
    pub fn toggled(self, direction: VoteDirection) -> Self {
        match (self, direction) {
            (Self::None, VoteDirection::Up) => Self::Upvoted,
            (Self::None, VoteDirection::Down) => Self::Downvoted,
            (Self::Upvoted, VoteDirection::Up) => Self::None,
            (Self::Downvoted, VoteDirection::Down) => Self::None,
            (other, _) => other,
        }
    }
}

impl Default for VoteState {
    fn default() -> Self {
        Self::None
    }
}
