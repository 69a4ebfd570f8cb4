use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoteTransportError {
    /// Request never completed or the server answered with a non-success
    /// status.
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected the request because the caller is not
    /// authenticated. Session handling itself is owned by the server's
    /// auth layer, not by this widget.
    #[error("authentication required")]
    AuthenticationRequired,

    /// The response body could not be decoded into a receipt.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
