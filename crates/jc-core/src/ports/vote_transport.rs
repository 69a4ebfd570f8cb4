use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ids::PostId;
use crate::vote::VoteDirection;

use super::errors::VoteTransportError;

/// Successful vote-toggle response.
///
/// The server returns the item's new aggregate score; the client commits it
/// wholesale and never does its own increment/decrement arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub score: i64,
}

/// Outbound port to the server's vote-toggle endpoints.
///
/// Both endpoints are idempotent toggles: a second call undoes the first.
/// Authentication rides on the ambient session, outside this port.
#[async_trait]
pub trait VoteTransportPort: Send + Sync {
    async fn toggle(
        &self,
        post_pk: &PostId,
        direction: VoteDirection,
    ) -> Result<VoteReceipt, VoteTransportError>;
}
