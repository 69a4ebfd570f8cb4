//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the vote domain independent
//! of the HTTP client and of whatever host renders the indicators.

pub mod errors;
pub mod indicator_view;
pub mod vote_transport;

pub use errors::VoteTransportError;
pub use indicator_view::IndicatorViewPort;
pub use vote_transport::{VoteReceipt, VoteTransportPort};
