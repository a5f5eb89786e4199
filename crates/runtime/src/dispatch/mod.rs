//! Input dispatch for editor hosts.
//!
//! Hosts translate raw device input into [`InputEvent`]s and hand them to a
//! [`HandlerRegistry`]. Handlers are registered explicitly with a name, a
//! priority and the input kind they react to, and receive the mutable
//! context they act on as an argument instead of capturing it.
//!
//! # Execution Order
//!
//! Handlers for an input kind run in ascending priority order (registration
//! order breaks ties). A handler returning [`Flow::Stop`] ends dispatch for
//! that event.

mod event;
mod registry;

pub use event::{InputEvent, InputKind};
pub use registry::{Handler, HandlerRegistry, RegisteredHandler};

/// Whether dispatch should continue to lower-priority handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// How a handler failure is treated during dispatch.
///
/// - Critical failures abort dispatch and are returned to the caller
/// - Important failures are logged and dispatch continues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlerCriticality {
    Critical,
    #[default]
    Important,
}
