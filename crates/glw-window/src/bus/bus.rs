//! Subscriber list with disposable subscriptions

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, warn};
use super::HostEvent;

type Handler = Rc<RefCell<dyn FnMut(&HostEvent)>>;

struct BusInner {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(u64, Handler)>>,
}

impl BusInner {
    fn is_subscribed(&self, id: u64) -> bool {
        self.handlers.borrow().iter().any(|(sid, _)| *sid == id)
    }

    fn remove(&self, id: u64) {
        self.handlers.borrow_mut().retain(|(sid, _)| *sid != id);
    }
}

/// Single-threaded broadcast channel for [`HostEvent`]s
///
/// Cloning yields another handle to the same bus.
#[derive(Clone)]
pub struct HostEventBus {
    inner: Rc<BusInner>,
}

impl Default for HostEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl HostEventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self {
            inner: Rc::new(BusInner {
                next_id: Cell::new(1),
                handlers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Register a handler; it runs until the subscription is dropped
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&HostEvent) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let handler: Handler = Rc::new(RefCell::new(handler));
        self.inner.handlers.borrow_mut().push((id, handler));
        debug!(id, "bus subscribe");
        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver `event` to every handler in registration order
    ///
    /// Handlers added during delivery see the next event. Handlers removed
    /// during delivery are skipped.
    pub fn publish(&self, event: &HostEvent) {
        let snapshot: Vec<(u64, Handler)> = self
            .inner
            .handlers
            .borrow()
            .iter()
            .map(|(id, h)| (*id, Rc::clone(h)))
            .collect();

        for (id, handler) in snapshot {
            if !self.inner.is_subscribed(id) {
                continue;
            }
            match handler.try_borrow_mut() {
                Ok(mut handler) => (&mut *handler)(event),
                Err(_) => warn!(id, topic = event.topic(), "re-entrant publish skipped"),
            }
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }
}

/// Handle keeping a bus handler registered
pub struct Subscription {
    id: u64,
    bus: Weak<BusInner>,
}

impl Subscription {
    /// Unsubscribe now
    pub fn dispose(self) {
        drop(self);
    }

    /// Check if the handler is still registered
    pub fn is_active(&self) -> bool {
        self.bus
            .upgrade()
            .map(|bus| bus.is_subscribed(self.id))
            .unwrap_or(false)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.remove(self.id);
            debug!(id = self.id, "bus unsubscribe");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(bus: &HostEventBus) -> (Subscription, Rc<RefCell<Vec<HostEvent>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = bus.subscribe(move |event| sink.borrow_mut().push(*event));
        (sub, seen)
    }

    #[test]
    fn test_publish_reaches_subscribers() {
        let bus = HostEventBus::new();
        let (_a, seen_a) = recorder(&bus);
        let (_b, seen_b) = recorder(&bus);

        bus.publish(&HostEvent::CaptureMouseRelease);
        assert_eq!(*seen_a.borrow(), vec![HostEvent::CaptureMouseRelease]);
        assert_eq!(*seen_b.borrow(), vec![HostEvent::CaptureMouseRelease]);
    }

    #[test]
    fn test_registration_order() {
        let bus = HostEventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);
        let _a = bus.subscribe(move |_| first.borrow_mut().push(1));
        let _b = bus.subscribe(move |_| second.borrow_mut().push(2));

        bus.publish(&HostEvent::CaptureMouseRelease);
        assert_eq!(*order.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_dispose_stops_delivery() {
        let bus = HostEventBus::new();
        let (sub, seen) = recorder(&bus);
        assert!(sub.is_active());
        assert_eq!(bus.subscriber_count(), 1);

        sub.dispose();
        assert_eq!(bus.subscriber_count(), 0);
        bus.publish(&HostEvent::GlobalMouseMove { x: 1.0, y: 2.0 });
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe_during_publish() {
        let bus = HostEventBus::new();
        let (victim, seen) = recorder(&bus);
        let slot = Rc::new(RefCell::new(Some(victim)));
        let slot_in = Rc::clone(&slot);
        // Registered after the victim but dropping it before the next event.
        let _killer = bus.subscribe(move |_| {
            slot_in.borrow_mut().take();
        });

        bus.publish(&HostEvent::CaptureMouseRelease);
        bus.publish(&HostEvent::CaptureMouseRelease);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_subscription_outlives_bus() {
        let bus = HostEventBus::new();
        let (sub, _seen) = recorder(&bus);
        drop(bus);
        assert!(!sub.is_active());
        drop(sub);
    }
}
