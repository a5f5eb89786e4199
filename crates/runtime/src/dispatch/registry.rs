//! Handler registry for routing input events.

use std::collections::HashMap;

use tracing::{error, trace};

use super::{Flow, HandlerCriticality, InputEvent, InputKind};
use crate::error::Result;

/// Boxed handler function operating on an explicit context.
pub type Handler<C> = Box<dyn Fn(&mut C, &InputEvent) -> Result<Flow> + Send + Sync>;

/// A handler together with its registration metadata.
pub struct RegisteredHandler<C> {
    name: &'static str,
    priority: i32,
    criticality: HandlerCriticality,
    handler: Handler<C>,
}

impl<C> RegisteredHandler<C> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn criticality(&self) -> HandlerCriticality {
        self.criticality
    }
}

/// Registry that routes each input event to the handlers registered for
/// its [`InputKind`].
pub struct HandlerRegistry<C> {
    handlers: HashMap<InputKind, Vec<RegisteredHandler<C>>>,
}

impl<C> HandlerRegistry<C> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers an important-criticality handler.
    pub fn register<F>(&mut self, kind: InputKind, name: &'static str, priority: i32, handler: F)
    where
        F: Fn(&mut C, &InputEvent) -> Result<Flow> + Send + Sync + 'static,
    {
        self.register_with(
            kind,
            name,
            priority,
            HandlerCriticality::Important,
            handler,
        );
    }

    /// Registers a handler with an explicit criticality.
    pub fn register_with<F>(
        &mut self,
        kind: InputKind,
        name: &'static str,
        priority: i32,
        criticality: HandlerCriticality,
        handler: F,
    ) where
        F: Fn(&mut C, &InputEvent) -> Result<Flow> + Send + Sync + 'static,
    {
        let handlers = self.handlers.entry(kind).or_default();
        handlers.push(RegisteredHandler {
            name,
            priority,
            criticality,
            handler: Box::new(handler),
        });
        // Stable sort keeps registration order among equal priorities.
        handlers.sort_by_key(|h| h.priority);
    }

    /// Runs the handlers for `event` against `ctx`.
    ///
    /// Returns the number of handlers that ran to completion. The first
    /// critical failure is returned as an error; important failures are
    /// logged and skipped.
    pub fn dispatch(&self, ctx: &mut C, event: &InputEvent) -> Result<usize> {
        let kind = event.kind();
        let Some(handlers) = self.handlers.get(&kind) else {
            trace!(target: "runtime::dispatch", %kind, "no handlers registered");
            return Ok(0);
        };

        let mut completed = 0;
        for handler in handlers {
            match (handler.handler)(&mut *ctx, event) {
                Ok(flow) => {
                    completed += 1;
                    if flow == Flow::Stop {
                        trace!(target: "runtime::dispatch", handler = handler.name, "dispatch stopped");
                        break;
                    }
                }
                Err(err) if handler.criticality == HandlerCriticality::Critical => {
                    error!(
                        target: "runtime::dispatch",
                        handler = handler.name,
                        criticality = "critical",
                        error = %err,
                        "Critical handler failed, aborting dispatch"
                    );
                    return Err(err);
                }
                Err(err) => {
                    error!(
                        target: "runtime::dispatch",
                        handler = handler.name,
                        criticality = "important",
                        error = %err,
                        "Handler failed, continuing"
                    );
                }
            }
        }

        Ok(completed)
    }

    /// Number of handlers registered for `kind`.
    pub fn len_for(&self, kind: InputKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.values().all(Vec::is_empty)
    }

    /// Handler names and priorities for `kind`, in execution order.
    pub fn handlers(&self, kind: InputKind) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.handlers
            .get(&kind)
            .into_iter()
            .flatten()
            .map(|h| (h.name, h.priority))
    }
}

impl<C> Default for HandlerRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;
    use hexmap_core::Direction;

    #[derive(Default)]
    struct Trace {
        calls: Vec<&'static str>,
    }

    fn record(name: &'static str) -> impl Fn(&mut Trace, &InputEvent) -> Result<Flow> {
        move |trace: &mut Trace, _: &InputEvent| {
            trace.calls.push(name);
            Ok(Flow::Continue)
        }
    }

    #[test]
    fn runs_handlers_in_priority_order() {
        let mut registry = HandlerRegistry::new();
        registry.register(InputKind::Move, "late", 10, record("late"));
        registry.register(InputKind::Move, "early", -5, record("early"));
        registry.register(InputKind::Move, "middle", 0, record("middle"));
        registry.register(InputKind::Move, "middle-second", 0, record("middle-second"));

        let mut trace = Trace::default();
        let ran = registry
            .dispatch(&mut trace, &InputEvent::Move(Direction::Up))
            .unwrap();
        assert_eq!(ran, 4);
        assert_eq!(trace.calls, vec!["early", "middle", "middle-second", "late"]);
    }

    #[test]
    fn handlers_are_listed_in_execution_order() {
        let mut registry = HandlerRegistry::<Trace>::new();
        assert!(registry.is_empty());
        registry.register(InputKind::Click, "late", 5, record("late"));
        registry.register(InputKind::Click, "early", -1, record("early"));
        registry.register(InputKind::Move, "move", 0, record("move"));

        assert_eq!(registry.len_for(InputKind::Click), 2);
        assert_eq!(registry.len_for(InputKind::Save), 0);
        assert_eq!(
            registry.handlers(InputKind::Click).collect::<Vec<_>>(),
            vec![("early", -1), ("late", 5)]
        );
    }

    #[test]
    fn only_matching_kind_is_dispatched() {
        let mut registry = HandlerRegistry::new();
        registry.register(InputKind::SetFog, "fog", 0, record("fog"));

        let mut trace = Trace::default();
        let ran = registry
            .dispatch(&mut trace, &InputEvent::Move(Direction::Down))
            .unwrap();
        assert_eq!(ran, 0);
        assert!(trace.calls.is_empty());
    }

    #[test]
    fn stop_ends_dispatch() {
        let mut registry = HandlerRegistry::new();
        registry.register(InputKind::Click, "consume", 0, |trace: &mut Trace, _: &InputEvent| {
            trace.calls.push("consume");
            Ok(Flow::Stop)
        });
        registry.register(InputKind::Click, "never", 1, record("never"));

        let mut trace = Trace::default();
        registry
            .dispatch(&mut trace, &InputEvent::Click { x: 0.0, y: 0.0 })
            .unwrap();
        assert_eq!(trace.calls, vec!["consume"]);
    }

    #[test]
    fn important_failures_do_not_stop_dispatch() {
        let mut registry = HandlerRegistry::new();
        registry.register(InputKind::PlaceAtCursor, "flaky", 0, |_: &mut Trace, _: &InputEvent| {
            Err(RuntimeError::handler("flaky", "boom"))
        });
        registry.register(InputKind::PlaceAtCursor, "after", 1, record("after"));

        let mut trace = Trace::default();
        let ran = registry
            .dispatch(&mut trace, &InputEvent::PlaceAtCursor)
            .unwrap();
        assert_eq!(ran, 1);
        assert_eq!(trace.calls, vec!["after"]);
    }

    #[test]
    fn critical_failures_abort() {
        let mut registry = HandlerRegistry::new();
        registry.register_with(
            InputKind::PlaceAtCursor,
            "strict",
            0,
            HandlerCriticality::Critical,
            |_: &mut Trace, _: &InputEvent| Err(RuntimeError::handler("strict", "boom")),
        );
        registry.register(InputKind::PlaceAtCursor, "after", 1, record("after"));

        let mut trace = Trace::default();
        let err = registry
            .dispatch(&mut trace, &InputEvent::PlaceAtCursor)
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Handler { handler: "strict", .. }));
        assert!(trace.calls.is_empty());
    }
}
