//! Host window-management API consumed by windows

use crate::math::Vec2;

/// Arguments of a host hit-test query
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTestQuery {
    /// Host window width
    pub width: f64,
    /// Host window height
    pub height: f64,
    /// Queried point, global coordinates
    pub x: f64,
    pub y: f64,
}

impl HitTestQuery {
    #[inline]
    pub fn point(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Callback answering whether a point belongs to a window
pub type HitTestCallback = Box<dyn Fn(HitTestQuery) -> bool>;

/// Capabilities provided by the hosting shell
///
/// The host performs OS-level capture and broadcasts
/// [`crate::bus::HostEvent`]s while global mouse tracking is enabled.
pub trait Host {
    /// Toggle pointer capture
    fn mouse_capture(&self, enabled: bool);

    /// Toggle broadcasting of global mouse moves
    fn global_mouse_move(&self, enabled: bool);

    /// Register a hit-test callback
    fn on_hit_test(&self, callback: HitTestCallback);
}

impl<H: Host + ?Sized> Host for std::rc::Rc<H> {
    fn mouse_capture(&self, enabled: bool) {
        (**self).mouse_capture(enabled)
    }

    fn global_mouse_move(&self, enabled: bool) {
        (**self).global_mouse_move(enabled)
    }

    fn on_hit_test(&self, callback: HitTestCallback) {
        (**self).on_hit_test(callback)
    }
}
