//! Tab-specific content rendering.

pub mod attentions;
pub mod injuries;
pub mod players;
pub mod users;
