//! Wiring a shared window to the host

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, warn};
use crate::host::Host;
use crate::surface::Surface;
use crate::window::Window;
use super::{HostEventBus, Subscription};

/// Live connection between a window, the bus and the host hit-test
///
/// Dropping or disposing it stops event delivery and makes the registered
/// hit-test callback answer `false`.
pub struct Attachment {
    subscription: Option<Subscription>,
    hit_test_live: Rc<Cell<bool>>,
}

impl Attachment {
    /// Detach the window
    pub fn dispose(mut self) {
        self.detach();
    }

    /// Check if the window still receives host events
    pub fn is_active(&self) -> bool {
        self.subscription.as_ref().map(Subscription::is_active).unwrap_or(false)
    }

    fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
            debug!("window detached");
        }
        self.hit_test_live.set(false);
    }
}

impl Drop for Attachment {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Subscribe `window` to `bus` and register its hit-test with the host
///
/// Only weak references to the window are kept.
pub fn attach<S, H>(window: &Rc<RefCell<Window<S, H>>>, bus: &HostEventBus) -> Attachment
where
    S: Surface + 'static,
    H: Host + 'static,
{
    let weak = Rc::downgrade(window);
    let subscription = bus.subscribe(move |event| {
        let Some(window) = weak.upgrade() else {
            return;
        };
        match window.try_borrow_mut() {
            Ok(mut window) => window.on_host_event(event),
            Err(_) => warn!(topic = event.topic(), "window busy, host event dropped"),
        };
    });

    let hit_test_live = Rc::new(Cell::new(true));
    let live = Rc::clone(&hit_test_live);
    let weak = Rc::downgrade(window);
    window.borrow().host().on_hit_test(Box::new(move |query| {
        if !live.get() {
            return false;
        }
        let Some(window) = weak.upgrade() else {
            return false;
        };
        let hit = match window.try_borrow() {
            Ok(window) => window.hit_test(query.point()),
            Err(_) => false,
        };
        hit
    }));

    Attachment {
        subscription: Some(subscription),
        hit_test_live,
    }
}
