//! Topic-based event bus for editor notifications.
//!
//! The bus is constructed explicitly and handed to whoever needs it; there
//! is no process-wide instance. Consumers subscribe to the topics they draw
//! from and only receive those events.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{MapEvent, SessionEvent, ViewEvent};
