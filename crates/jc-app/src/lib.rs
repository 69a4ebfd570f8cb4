//! JournalClub vote widget application layer
//!
//! This crate contains the use cases that drive the vote phase machine
//! through its ports: activating a toggle, reconciling the server receipt,
//! and routing page-level activations to per-item widgets.

pub mod usecases;

pub use usecases::vote::{VoteBoard, VoteWidget, VoteWidgetError};
