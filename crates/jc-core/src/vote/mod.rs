//! Vote domain: tri-state vote indicator synchronized with the server.

pub mod direction;
pub mod item;
pub mod state;
pub mod state_machine;
pub mod view;

pub use direction::VoteDirection;
pub use item::{PageSnapshot, PostSnapshot, VotableItem};
pub use state::VoteState;
pub use state_machine::{VoteAction, VoteEvent, VoteStateMachine, WidgetPhase};
pub use view::{IndicatorView, WidgetView};
