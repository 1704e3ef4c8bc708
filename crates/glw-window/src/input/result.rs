//! Pointer event and outcome types

use serde::Serialize;
use crate::math::Vec2;

/// What a mouse-down landed on, as classified by the surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the titlebar, on a draggable part
    Titlebar,
    /// Inside the titlebar, on or under a no-drag element
    TitlebarNoDrag,
    /// Anywhere else on the window
    Body,
}

/// Mouse-down on the bound element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerDown {
    /// Cursor position in global coordinates
    pub position: Vec2,
    /// Classified target
    pub target: PointerTarget,
}

impl PointerDown {
    pub fn new(x: f64, y: f64, target: PointerTarget) -> Self {
        Self {
            position: Vec2::new(x, y),
            target,
        }
    }
}

/// Result of handling a mouse-down
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerOutcome {
    /// Nothing started
    Ignored,
    /// A titlebar drag started
    DragStarted,
    /// A resize started; the caller should suppress the default action
    ResizeStarted,
}

impl PointerOutcome {
    /// Check if a gesture started
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, PointerOutcome::Ignored)
    }

    /// Check if the platform default action must be suppressed
    #[inline]
    pub fn prevents_default(&self) -> bool {
        matches!(self, PointerOutcome::ResizeStarted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_flags() {
        assert!(!PointerOutcome::Ignored.is_handled());
        assert!(PointerOutcome::DragStarted.is_handled());
        assert!(!PointerOutcome::DragStarted.prevents_default());
        assert!(PointerOutcome::ResizeStarted.prevents_default());
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let json = serde_json::to_string(&PointerOutcome::ResizeStarted).unwrap();
        assert_eq!(json, r#"{"type":"resizestarted"}"#);
    }
}
