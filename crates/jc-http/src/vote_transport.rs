use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use jc_core::ports::{VoteReceipt, VoteTransportError, VoteTransportPort};
use jc_core::vote::VoteDirection;
use jc_core::{PostId, VoteConfig};

/// `reqwest` implementation of the vote transport port.
///
/// Speaks the server's vote-toggle contract: a form POST carrying the
/// anti-forgery token and the post id, answered with a JSON body holding
/// the item's new aggregate score. Session authentication rides on the
/// client's cookie jar; this adapter never touches credentials.
pub struct HttpVoteTransport {
    client: reqwest::Client,
    config: VoteConfig,
}

impl HttpVoteTransport {
    pub fn new(config: VoteConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { client, config })
    }

    /// Build against an existing client, e.g. one that already holds the
    /// page's session cookies.
    pub fn with_client(client: reqwest::Client, config: VoteConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl VoteTransportPort for HttpVoteTransport {
    async fn toggle(
        &self,
        post_pk: &PostId,
        direction: VoteDirection,
    ) -> Result<VoteReceipt, VoteTransportError> {
        let url = self.config.endpoints.for_direction(direction);
        let form = [
            ("csrfmiddlewaretoken", self.config.csrf_token.as_str()),
            ("post_pk", post_pk.as_ref()),
        ];

        debug!(post_pk = %post_pk, %direction, url, "sending vote toggle");
        let response = self
            .client
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(|e| VoteTransportError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(VoteTransportError::AuthenticationRequired);
            }
            status if !status.is_success() => {
                return Err(VoteTransportError::Network(format!(
                    "server answered {status}"
                )));
            }
            _ => {}
        }

        let receipt: VoteReceipt = response
            .json()
            .await
            .map_err(|e| VoteTransportError::MalformedResponse(e.to_string()))?;
        debug!(post_pk = %post_pk, score = receipt.score, "vote toggle confirmed");
        Ok(receipt)
    }
}
