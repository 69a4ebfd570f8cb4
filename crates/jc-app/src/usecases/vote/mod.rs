pub mod board;
pub mod widget;

pub use board::{VoteBoard, VoteWidgetError};
pub use widget::VoteWidget;
