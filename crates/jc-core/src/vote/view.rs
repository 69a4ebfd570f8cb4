//! Pure render projection of a votable item into the page's DOM vocabulary.
//!
//! The class names, labels and element id patterns match the markup the
//! server templates render, so a host can apply a [`WidgetView`] verbatim.
//! The projection is one-way: the DOM never feeds state back.

use serde::Serialize;

use super::direction::VoteDirection;
use super::item::VotableItem;
use super::state::VoteState;

/// CSS class of a neutral up indicator.
pub const CLASS_UP_NEUTRAL: &str = "up-arrow";
/// CSS class of an active up indicator.
pub const CLASS_UP_ACTIVE: &str = "upvoted-arrow";
/// CSS class of a neutral down indicator.
pub const CLASS_DOWN_NEUTRAL: &str = "down-arrow";
/// CSS class of an active down indicator.
pub const CLASS_DOWN_ACTIVE: &str = "downvoted-arrow";
/// Marker class present on whichever indicator is active.
pub const CLASS_ACTIVE_MARKER: &str = "active-vote";

/// Rendering of one indicator (arrow element).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorView {
    /// DOM id of the indicator element, e.g. `up-7`.
    pub element_id: String,
    /// Space-separated class list to replace the element's classes with.
    pub css_classes: String,
    /// Link text, e.g. `upvote` / `upvoted`.
    pub label: &'static str,
    pub active: bool,
}

impl IndicatorView {
    fn project(item: &VotableItem, direction: VoteDirection) -> Self {
        let active = item.vote.is_active(direction);
        let (prefix, label, css_classes) = match (direction, active) {
            (VoteDirection::Up, false) => ("up", "upvote", CLASS_UP_NEUTRAL.to_string()),
            (VoteDirection::Up, true) => (
                "up",
                "upvoted",
                format!("{CLASS_UP_ACTIVE} {CLASS_ACTIVE_MARKER}"),
            ),
            (VoteDirection::Down, false) => ("down", "downvote", CLASS_DOWN_NEUTRAL.to_string()),
            (VoteDirection::Down, true) => (
                "down",
                "downvoted",
                format!("{CLASS_DOWN_ACTIVE} {CLASS_ACTIVE_MARKER}"),
            ),
        };
        Self {
            element_id: format!("{prefix}-{}", item.id),
            css_classes,
            label,
            active,
        }
    }
}

/// Full rendering of one widget: both indicators plus the score label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub up: IndicatorView,
    pub down: IndicatorView,
    /// DOM id of the score element, e.g. `commentscore-pk-7`.
    pub score_element_id: String,
    /// Decimal rendering of the server-confirmed score.
    pub score_text: String,
}

impl WidgetView {
    pub fn project(item: &VotableItem) -> Self {
        Self {
            up: IndicatorView::project(item, VoteDirection::Up),
            down: IndicatorView::project(item, VoteDirection::Down),
            score_element_id: format!("commentscore-pk-{}", item.id),
            score_text: item.score.to_string(),
        }
    }
}
