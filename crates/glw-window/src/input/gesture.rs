//! Gesture state for pointer interactions

use crate::math::Vec2;
use super::ResizeSession;

/// Current pointer gesture of a window
///
/// Dragging and resizing are exclusive by construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
    /// No gesture in progress
    #[default]
    Idle,
    /// Moving the window by its titlebar
    Dragging {
        /// Offset from titlebar origin to cursor at drag start
        offset: Vec2,
    },
    /// Moving one or two edges of the window
    Resizing(ResizeSession),
}

impl Gesture {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    #[inline]
    pub fn is_resizing(&self) -> bool {
        matches!(self, Gesture::Resizing(_))
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Idle => "idle",
            Gesture::Dragging { .. } => "dragging",
            Gesture::Resizing(_) => "resizing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rect;
    use crate::window::{EdgeOffsets, Edges};

    #[test]
    fn test_idle_by_default() {
        let gesture = Gesture::default();
        assert!(gesture.is_idle());
        assert!(!gesture.is_dragging());
        assert!(!gesture.is_resizing());
        assert_eq!(gesture.name(), "idle");
    }

    #[test]
    fn test_dragging_state() {
        let gesture = Gesture::Dragging { offset: Vec2::new(10.0, 20.0) };
        assert!(gesture.is_dragging());
        assert!(!gesture.is_idle());
        assert!(!gesture.is_resizing());

        if let Gesture::Dragging { offset } = gesture {
            assert!((offset.x - 10.0).abs() < 0.001);
            assert!((offset.y - 20.0).abs() < 0.001);
        } else {
            panic!("Expected Dragging state");
        }
    }

    #[test]
    fn test_resizing_state() {
        let origin = Rect::new(100.0, 100.0, 400.0, 300.0);
        let session = ResizeSession::new(
            Edges::SOUTH.with(Edges::EAST),
            origin,
            EdgeOffsets::measure(&origin, Vec2::new(498.0, 398.0)),
        );
        let gesture = Gesture::Resizing(session);
        assert!(gesture.is_resizing());
        assert!(!gesture.is_dragging());
        assert_eq!(gesture.name(), "resizing");
    }
}
