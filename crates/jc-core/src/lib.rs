//! # jc-core
//!
//! Core domain models and business logic for the JournalClub vote widget.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod ports;
pub mod vote;

// Re-export commonly used types at the crate root
pub use config::{VoteConfig, VoteEndpoints};
pub use ids::PostId;
pub use vote::{
    PageSnapshot, PostSnapshot, VotableItem, VoteAction, VoteDirection, VoteEvent, VoteState,
    WidgetPhase, WidgetView,
};
