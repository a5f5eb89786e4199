//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::broadcast;

use super::types::{MapEvent, SessionEvent, ViewEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, strum::EnumIter)]
pub enum Topic {
    /// Tile placement and map replacement
    Map,
    /// Cursor, fog flag and visibility
    View,
    /// Save/load outcomes
    Session,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Map(MapEvent),
    View(ViewEvent),
    Session(SessionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Map(_) => Topic::Map,
            Event::View(_) => Topic::View,
            Event::Session(_) => Topic::Session,
        }
    }
}

impl From<MapEvent> for Event {
    fn from(event: MapEvent) -> Self {
        Event::Map(event)
    }
}

impl From<ViewEvent> for Event {
    fn from(event: ViewEvent) -> Self {
        Event::View(event)
    }
}

impl From<SessionEvent> for Event {
    fn from(event: SessionEvent) -> Self {
        Event::Session(event)
    }
}

/// Topic-based event bus
///
/// Channels for every topic are created up front, so publishing and
/// subscribing never block and never fail. Clones share the same channels.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let channels = <Topic as strum::IntoEnumIterator>::iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic.
    ///
    /// Returns the number of subscribers that will see it.
    pub fn publish(&self, event: impl Into<Event>) -> usize {
        let event = event.into();
        let topic = event.topic();

        match self.channels.get(&topic).map(|tx| tx.send(event)) {
            Some(Ok(receivers)) => receivers,
            _ => {
                // No subscribers for this topic - this is normal, not an error
                tracing::trace!("No subscribers for topic {:?}", topic);
                0
            }
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        match self.channels.get(&topic) {
            Some(tx) => tx.subscribe(),
            // Every topic is inserted in `with_capacity`; an orphan receiver
            // simply never yields.
            None => broadcast::channel(1).1,
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
