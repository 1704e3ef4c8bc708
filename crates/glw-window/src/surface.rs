//! Surface abstraction over the bound element

use serde::Serialize;
use crate::math::{Rect, Vec2};
use crate::window::Cursor;

/// Inline style update in pixels; `None` leaves a property untouched
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BoxPatch {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl BoxPatch {
    /// Patch moving the origin only
    pub fn position(left: f64, top: f64) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
            ..Default::default()
        }
    }

    /// Patch resizing only
    pub fn size(width: Option<f64>, height: Option<f64>) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Check if the patch changes nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none() && self.width.is_none() && self.height.is_none()
    }
}

/// Named notification dispatched on the element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    Show,
    Hide,
}

impl WindowEvent {
    /// DOM event type
    pub fn name(&self) -> &'static str {
        match self {
            WindowEvent::Show => "show",
            WindowEvent::Hide => "hide",
        }
    }
}

/// The on-screen element a window drives
///
/// Rectangles are in the same global coordinate space as pointer events.
pub trait Surface {
    /// Bounding rectangle of the element
    fn bounds(&self) -> Rect;

    /// Bounding rectangle of the titlebar, if the element has one
    fn titlebar_bounds(&self) -> Option<Rect>;

    /// Set or clear the cursor override
    fn set_cursor(&mut self, cursor: Cursor);

    /// Write position and size
    fn apply(&mut self, patch: &BoxPatch);

    fn set_visible(&mut self, visible: bool);

    /// Dispatch a named event on the element
    fn emit(&mut self, event: WindowEvent);

    /// Check whether the element is among the elements at `point`
    fn contains_point(&self, point: Vec2) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_constructors() {
        let p = BoxPatch::position(10.0, 20.0);
        assert_eq!(p.left, Some(10.0));
        assert_eq!(p.top, Some(20.0));
        assert_eq!(p.width, None);

        let s = BoxPatch::size(Some(100.0), None);
        assert_eq!(s.width, Some(100.0));
        assert_eq!(s.height, None);
        assert!(!s.is_empty());
        assert!(BoxPatch::default().is_empty());
    }

    #[test]
    fn test_event_names() {
        assert_eq!(WindowEvent::Show.name(), "show");
        assert_eq!(WindowEvent::Hide.name(), "hide");
    }
}
