use serde::{Deserialize, Serialize};

use crate::ids::PostId;

use super::state::VoteState;

/// One votable item as the client knows it.
///
/// `score` is the last value the server returned; the client never computes
/// it. `vote` is the server-confirmed vote state, seeded from the rendered
/// markup at page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotableItem {
    pub id: PostId,
    pub vote: VoteState,
    pub score: i64,
}

impl VotableItem {
    pub fn from_snapshot(snapshot: PostSnapshot) -> Self {
        Self {
            id: snapshot.post_pk,
            vote: snapshot.vote,
            score: snapshot.score,
        }
    }
}

/// Per-item state the server rendered into the page markup.
///
/// 服务端渲染进页面的单项初始状态。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSnapshot {
    pub post_pk: PostId,
    #[serde(default)]
    pub vote: VoteState,
    pub score: i64,
}

/// All votable items on one rendered page.
///
/// This is the widget's only initialization source: vote state lives in the
/// browser tab's memory and is re-derived from the server on the next load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub posts: Vec<PostSnapshot>,
}

impl PageSnapshot {
    pub fn new(posts: Vec<PostSnapshot>) -> Self {
        Self { posts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_vote_state_defaults_to_none_when_absent() {
        let snapshot: PostSnapshot =
            serde_json::from_str(r#"{"post_pk": "7", "score": 10}"#).unwrap();
        assert_eq!(snapshot.vote, VoteState::None);
        assert_eq!(snapshot.post_pk, PostId::from("7"));
        assert_eq!(snapshot.score, 10);
    }

    #[test]
    fn item_is_seeded_from_snapshot() {
        let item = VotableItem::from_snapshot(PostSnapshot {
            post_pk: PostId::from("42"),
            vote: VoteState::Upvoted,
            score: 5,
        });
        assert_eq!(item.id, PostId::from("42"));
        assert_eq!(item.vote, VoteState::Upvoted);
        assert_eq!(item.score, 5);
    }
}
