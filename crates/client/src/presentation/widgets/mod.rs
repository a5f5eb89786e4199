//! Widgets composing the editor screen.
pub mod footer;
pub mod info;
pub mod map;
pub mod messages;
pub mod prompt;
