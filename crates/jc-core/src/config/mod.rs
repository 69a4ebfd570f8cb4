//! Vote widget configuration domain model

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::vote::VoteDirection;

/// Configuration one widget board is constructed with.
///
/// The original page pulled endpoint URLs and the CSRF token out of ambient
/// globals; here they are explicit construction-time inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteConfig {
    /// Vote-toggle endpoint URLs
    pub endpoints: VoteEndpoints,

    /// Anti-forgery token the server issued for this page
    pub csrf_token: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Per-direction vote-toggle endpoint URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteEndpoints {
    pub upvote: String,
    pub downvote: String,
}

impl VoteEndpoints {
    pub fn for_direction(&self, direction: VoteDirection) -> &str {
        match direction {
            VoteDirection::Up => &self.upvote,
            VoteDirection::Down => &self.downvote,
        }
    }
}

impl VoteConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for VoteConfig {
    fn default() -> Self {
        Self {
            endpoints: VoteEndpoints {
                upvote: "/papers/upvote/".to_string(),
                downvote: "/papers/downvote/".to_string(),
            },
            csrf_token: String::new(),
            request_timeout_secs: 10,
        }
    }
}
