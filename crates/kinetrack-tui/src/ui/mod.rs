//! Terminal UI module using ratatui.
//!
//! - `render`: main frame rendering and overlays
//! - `input`: keyboard event handling
//! - `styles`: color palette and text styling
//! - `tabs`: tab-specific content rendering

pub mod input;
pub mod render;
pub mod styles;
pub mod tabs;
