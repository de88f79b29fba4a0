//! Event registration and dispatch.

use std::{collections::BTreeMap, fmt};

/// Dispatches events to handlers registered per event kind.
///
/// A registry maps each event kind to an ordered list of handlers. Firing a
/// kind invokes every handler registered for it, in registration order, with
/// a shared reference to the event payload. Firing a kind nobody registered
/// for is a no-op.
///
/// Handlers are closures; any fixed arguments a handler needs are captured
/// at registration time.
///
/// # Example
///
/// ```
/// use reprise_components::EventRegistry;
///
/// let mut registry = EventRegistry::new();
/// registry.on("click", |position: &(i32, i32)| {
///     println!("clicked at {position:?}");
/// });
///
/// assert_eq!(registry.fire("click", &(3, 4)), 1);
/// assert_eq!(registry.fire("scroll", &(0, 0)), 0);
/// ```
pub struct EventRegistry<E> {
    registry: BTreeMap<String, Vec<Box<dyn FnMut(&E)>>>,
}

impl<E> EventRegistry<E> {
    /// Creates a registry with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: BTreeMap::new(),
        }
    }

    /// Registers a handler for `kind`.
    ///
    /// Handlers registered for the same kind run in registration order when
    /// that kind is fired.
    pub fn on(&mut self, kind: impl Into<String>, handler: impl FnMut(&E) + 'static) {
        self.registry
            .entry(kind.into())
            .or_default()
            .push(Box::new(handler));
    }

    /// Fires `event` to every handler registered for `kind`.
    ///
    /// Returns the number of handlers invoked; a kind with no registrations
    /// returns 0 without invoking anything.
    pub fn fire(&mut self, kind: &str, event: &E) -> usize {
        match self.registry.get_mut(kind) {
            Some(handlers) => {
                for handler in handlers.iter_mut() {
                    handler(event);
                }
                handlers.len()
            }
            None => 0,
        }
    }

    /// Returns the number of handlers registered for `kind`.
    #[must_use]
    pub fn handler_count(&self, kind: &str) -> usize {
        self.registry.get(kind).map_or(0, Vec::len)
    }
}

impl<E> Default for EventRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handlers are opaque; debug output shows each kind with its handler count.
impl<E> fmt::Debug for EventRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.registry
                    .iter()
                    .map(|(kind, handlers)| (kind, handlers.len())),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn fires_every_handler_for_a_kind_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = EventRegistry::new();

        for label in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            registry.on("ping", move |value: &u64| {
                log.borrow_mut().push((label, *value));
            });
        }

        let invoked = registry.fire("ping", &7);

        assert_eq!(invoked, 3);
        assert_eq!(
            *log.borrow(),
            [("first", 7), ("second", 7), ("third", 7)]
        );
    }

    #[test]
    fn firing_an_unknown_kind_is_a_no_op() {
        let mut registry: EventRegistry<u64> = EventRegistry::new();
        registry.on("known", |_| {});

        assert_eq!(registry.fire("unknown", &0), 0);
    }

    #[test]
    fn kinds_are_dispatched_independently() {
        let count = Rc::new(RefCell::new(0));
        let mut registry = EventRegistry::new();

        {
            let count = Rc::clone(&count);
            registry.on("counted", move |_: &()| {
                *count.borrow_mut() += 1;
            });
        }
        registry.on("ignored", |_: &()| {});

        registry.fire("counted", &());
        registry.fire("counted", &());
        registry.fire("ignored", &());

        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn handlers_accumulate_per_kind() {
        let mut registry: EventRegistry<()> = EventRegistry::new();

        registry.on("a", |_| {});
        registry.on("a", |_| {});
        registry.on("b", |_| {});

        assert_eq!(registry.handler_count("a"), 2);
        assert_eq!(registry.handler_count("b"), 1);
        assert_eq!(registry.handler_count("c"), 0);
    }

    #[test]
    fn handlers_can_mutate_captured_state() {
        let last_seen = Rc::new(RefCell::new(None));
        let mut registry = EventRegistry::new();

        {
            let last_seen = Rc::clone(&last_seen);
            registry.on("update", move |value: &String| {
                *last_seen.borrow_mut() = Some(value.clone());
            });
        }

        registry.fire("update", &"hello".to_string());

        assert_eq!(last_seen.borrow().as_deref(), Some("hello"));
    }
}
