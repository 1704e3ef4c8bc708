//! Pointer input module
//!
//! Provides the gesture state machine for titlebar drags and edge resizes.

mod gesture;
mod resize;
mod result;

pub use gesture::Gesture;
pub use resize::ResizeSession;
pub use result::{PointerDown, PointerOutcome, PointerTarget};

/// Fit a candidate dimension during a resize
///
/// Returns the value to apply, or `None` to leave the dimension untouched.
/// A candidate beyond a configured maximum is clamped to it. The result is
/// applied when it is above the minimum or above the last applied value, so
/// growing always succeeds while shrinking stops at the minimum. An absent
/// minimum behaves as zero.
pub fn fit_dimension(candidate: f64, min: Option<f64>, max: Option<f64>, last: f64) -> Option<f64> {
    let value = match max {
        Some(max) if candidate > max => max,
        _ => candidate,
    };
    (value > min.unwrap_or(0.0) || value > last).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_above_min() {
        assert_eq!(fit_dimension(250.0, Some(200.0), None, 300.0), Some(250.0));
    }

    #[test]
    fn test_reject_below_min_when_shrinking() {
        assert_eq!(fit_dimension(150.0, Some(200.0), None, 220.0), None);
    }

    #[test]
    fn test_accept_growth_below_min() {
        // Started under the minimum: growing is still allowed.
        assert_eq!(fit_dimension(150.0, Some(200.0), None, 120.0), Some(150.0));
    }

    #[test]
    fn test_min_is_exclusive() {
        assert_eq!(fit_dimension(200.0, Some(200.0), None, 250.0), None);
    }

    #[test]
    fn test_absent_min_is_zero() {
        assert_eq!(fit_dimension(10.0, None, None, 400.0), Some(10.0));
        assert_eq!(fit_dimension(0.0, None, None, 400.0), None);
        assert_eq!(fit_dimension(-5.0, None, None, 400.0), None);
    }

    #[test]
    fn test_max_clamps_growth() {
        assert_eq!(fit_dimension(1000.0, None, Some(800.0), 700.0), Some(800.0));
        assert_eq!(fit_dimension(800.0, None, Some(800.0), 700.0), Some(800.0));
        assert_eq!(fit_dimension(750.0, None, Some(800.0), 700.0), Some(750.0));
    }
}
