//! Host event bus
//!
//! The host broadcasts global pointer moves and the end of pointer capture to
//! every window in the process. Windows subscribe at attach time and
//! unsubscribe when their [`Attachment`] is disposed.

#[allow(clippy::module_inception)]
mod bus;
mod attach;

pub use bus::{HostEventBus, Subscription};
pub use attach::{attach, Attachment};

use serde::{Deserialize, Serialize};

/// Event type of global mouse moves
pub const GLOBAL_MOUSE_MOVE: &str = "globalmousemove";
/// Event type of capture release
pub const CAPTURE_MOUSE_RELEASE: &str = "capturemouserelease";

/// Payload of a `globalmousemove` event, screen coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MouseDetail {
    pub x: f64,
    pub y: f64,
}

/// Broadcast from the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    /// Pointer moved while global tracking is enabled
    GlobalMouseMove { x: f64, y: f64 },
    /// Pointer capture ended; every gesture stops
    CaptureMouseRelease,
}

impl HostEvent {
    /// Event type name on the wire
    pub fn topic(&self) -> &'static str {
        match self {
            HostEvent::GlobalMouseMove { .. } => GLOBAL_MOUSE_MOVE,
            HostEvent::CaptureMouseRelease => CAPTURE_MOUSE_RELEASE,
        }
    }
}

impl From<MouseDetail> for HostEvent {
    fn from(detail: MouseDetail) -> Self {
        HostEvent::GlobalMouseMove {
            x: detail.x,
            y: detail.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics() {
        assert_eq!(HostEvent::GlobalMouseMove { x: 0.0, y: 0.0 }.topic(), "globalmousemove");
        assert_eq!(HostEvent::CaptureMouseRelease.topic(), "capturemouserelease");
    }

    #[test]
    fn test_detail_from_json() {
        let detail: MouseDetail = serde_json::from_str(r#"{"x": 12.5, "y": -4}"#).unwrap();
        assert_eq!(HostEvent::from(detail), HostEvent::GlobalMouseMove { x: 12.5, y: -4.0 });
    }
}
