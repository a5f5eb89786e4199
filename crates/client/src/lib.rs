//! Terminal UI host for the hex map editor.
//!
//! The client is a thin layer over [`hexmap_runtime::EditorSession`]:
//! - [`input`] maps crossterm keys and mouse clicks to editor input events
//! - [`presentation`] draws the grid on a ratatui canvas and owns the
//!   terminal lifecycle
//! - [`app`] assembles the session and runs the event loop
//!
//! All logging goes to a per-session file; the terminal belongs to the UI.

pub mod app;
pub mod config;
mod event_loop;
pub mod input;
pub mod logging;
pub mod message;
pub mod presentation;
pub mod state;

pub use app::CliApp;
pub use config::CliConfig;
