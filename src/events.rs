//! Synchronous publish/subscribe channel.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Handle returned by [`EventChannel::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<E> = Box<dyn FnMut(&E)>;

/// A list of handlers that are called, in registration order, on every publish.
///
/// Delivery is synchronous and unbuffered: [`publish`](Self::publish) returns
/// once every handler registered at that moment has run exactly once.
pub struct EventChannel<E> {
    handlers: Vec<(SubscriptionId, Handler<E>)>,
    next_id: u64,
}

impl<E> EventChannel<E> {
    /// Creates a channel with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a handler and returns its subscription id.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        log::trace!("subscribed {id:?} ({} total)", self.handlers.len());
        id
    }

    /// Removes a handler.
    ///
    /// Returns `false` if the id is unknown or was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        let removed = self.handlers.len() != before;
        log::trace!("unsubscribe {id:?}: removed = {removed}");
        removed
    }

    /// Calls every registered handler with `event`.
    pub fn publish(&mut self, event: &E) {
        log::trace!("publishing to {} subscriber(s)", self.handlers.len());
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns whether no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<E> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventChannel<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChannel")
            .field("subscribers", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
