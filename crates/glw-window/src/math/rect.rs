//! Axis-aligned rectangle, shaped like a DOM bounding client rect

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Rectangle with origin at its top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left corner
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point lies inside the rectangle (right/bottom exclusive)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(100.0, 50.0, 400.0, 300.0);
        assert!((r.left() - 100.0).abs() < 0.001);
        assert!((r.top() - 50.0).abs() < 0.001);
        assert!((r.right() - 500.0).abs() < 0.001);
        assert!((r.bottom() - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(99.9, 50.0)));
        assert!(!r.contains(Vec2::new(100.0, 50.0)));
        assert!(!r.contains(Vec2::new(-1.0, 50.0)));
    }

    #[test]
    fn test_rect_origin_and_size() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.origin(), Vec2::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(30.0, 40.0));
    }
}
