//! # jc-http
//!
//! Infrastructure adapter implementing the vote transport port over HTTP.

pub mod vote_transport;

pub use vote_transport::HttpVoteTransport;
