//! Edge sets and cursor-to-edge distances

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Vec2};

/// Set of window edges driven by a resize gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edges {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Edges {
    pub const NONE: Edges = Edges::new(false, false, false, false);
    pub const NORTH: Edges = Edges::new(true, false, false, false);
    pub const SOUTH: Edges = Edges::new(false, true, false, false);
    pub const EAST: Edges = Edges::new(false, false, true, false);
    pub const WEST: Edges = Edges::new(false, false, false, true);

    #[inline]
    pub const fn new(north: bool, south: bool, east: bool, west: bool) -> Self {
        Self { north, south, east, west }
    }

    /// Union of two edge sets
    #[inline]
    pub const fn with(self, other: Edges) -> Self {
        Self::new(
            self.north || other.north,
            self.south || other.south,
            self.east || other.east,
            self.west || other.west,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Edges::NONE
    }

    /// Check if two perpendicular edges are active
    #[inline]
    pub fn is_corner(self) -> bool {
        (self.north || self.south) && (self.east || self.west)
    }
}

/// Distances from the cursor to each edge of a rectangle
///
/// Positive values mean the cursor is inside relative to that edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeOffsets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl EdgeOffsets {
    /// Measure the offsets of `point` against `rect`
    pub fn measure(rect: &Rect, point: Vec2) -> Self {
        Self {
            left: point.x - rect.left(),
            top: point.y - rect.top(),
            right: rect.right() - point.x,
            bottom: rect.bottom() - point.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_union() {
        let ne = Edges::NORTH.with(Edges::EAST);
        assert!(ne.north && ne.east);
        assert!(!ne.south && !ne.west);
        assert!(ne.is_corner());
        assert!(!Edges::NORTH.is_corner());
        assert!(Edges::NONE.is_empty());
    }

    #[test]
    fn test_measure_offsets() {
        let rect = Rect::new(100.0, 100.0, 400.0, 300.0);
        let offsets = EdgeOffsets::measure(&rect, Vec2::new(103.0, 398.0));
        assert!((offsets.left - 3.0).abs() < 0.001);
        assert!((offsets.top - 298.0).abs() < 0.001);
        assert!((offsets.right - 397.0).abs() < 0.001);
        assert!((offsets.bottom - 2.0).abs() < 0.001);
    }
}
