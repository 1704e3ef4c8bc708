//! Cursor affordance for the resize border

use serde::{Deserialize, Serialize};
use super::{EdgeOffsets, Edges};

/// Cursor override shown over a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cursor {
    /// No override; the stylesheet decides
    #[default]
    Default,
    /// North (top) edge
    N,
    /// Northeast corner
    NE,
    /// Northwest corner
    NW,
    /// South (bottom) edge
    S,
    /// Southeast corner
    SE,
    /// Southwest corner
    SW,
    /// East (right) edge
    E,
    /// West (left) edge
    W,
}

impl Cursor {
    /// Pick the cursor for a pointer at `offsets` from each edge
    ///
    /// Corners resolve with top checked first, then left, then bottom, then
    /// right. A cursor exactly `border` pixels away still counts as inside.
    pub fn from_offsets(offsets: &EdgeOffsets, border: f64) -> Self {
        if offsets.top <= border {
            if offsets.left <= border {
                Cursor::NW
            } else if offsets.right <= border {
                Cursor::NE
            } else {
                Cursor::N
            }
        } else if offsets.left <= border {
            if offsets.bottom <= border {
                Cursor::SW
            } else {
                Cursor::W
            }
        } else if offsets.bottom <= border {
            if offsets.right <= border {
                Cursor::SE
            } else {
                Cursor::S
            }
        } else if offsets.right <= border {
            Cursor::E
        } else {
            Cursor::Default
        }
    }

    /// CSS `cursor` value; empty clears the inline override
    pub fn css(&self) -> &'static str {
        match self {
            Cursor::Default => "",
            Cursor::N => "n-resize",
            Cursor::NE => "ne-resize",
            Cursor::NW => "nw-resize",
            Cursor::S => "s-resize",
            Cursor::SE => "se-resize",
            Cursor::SW => "sw-resize",
            Cursor::E => "e-resize",
            Cursor::W => "w-resize",
        }
    }

    /// Check if this cursor advertises a resize
    #[inline]
    pub fn is_resize(&self) -> bool {
        !matches!(self, Cursor::Default)
    }

    /// Edges a resize started under this cursor will move
    pub fn edges(&self) -> Edges {
        match self {
            Cursor::Default => Edges::NONE,
            Cursor::N => Edges::NORTH,
            Cursor::NE => Edges::NORTH.with(Edges::EAST),
            Cursor::NW => Edges::NORTH.with(Edges::WEST),
            Cursor::S => Edges::SOUTH,
            Cursor::SE => Edges::SOUTH.with(Edges::EAST),
            Cursor::SW => Edges::SOUTH.with(Edges::WEST),
            Cursor::E => Edges::EAST,
            Cursor::W => Edges::WEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rect, Vec2};

    const BORDER: f64 = 5.0;

    fn cursor_at(x: f64, y: f64) -> Cursor {
        let rect = Rect::new(100.0, 100.0, 400.0, 300.0);
        Cursor::from_offsets(&EdgeOffsets::measure(&rect, Vec2::new(x, y)), BORDER)
    }

    #[test]
    fn test_single_edges() {
        assert_eq!(cursor_at(300.0, 102.0), Cursor::N);
        assert_eq!(cursor_at(102.0, 250.0), Cursor::W);
        assert_eq!(cursor_at(300.0, 398.0), Cursor::S);
        assert_eq!(cursor_at(498.0, 250.0), Cursor::E);
    }

    #[test]
    fn test_corners() {
        assert_eq!(cursor_at(102.0, 102.0), Cursor::NW);
        assert_eq!(cursor_at(498.0, 102.0), Cursor::NE);
        assert_eq!(cursor_at(102.0, 398.0), Cursor::SW);
        assert_eq!(cursor_at(498.0, 398.0), Cursor::SE);
    }

    #[test]
    fn test_top_wins_on_tiny_window() {
        // Every edge is within the border: top is checked first, then left.
        let rect = Rect::new(0.0, 0.0, 6.0, 6.0);
        let cursor = Cursor::from_offsets(&EdgeOffsets::measure(&rect, Vec2::new(3.0, 3.0)), BORDER);
        assert_eq!(cursor, Cursor::NW);
    }

    #[test]
    fn test_border_is_inclusive() {
        assert_eq!(cursor_at(300.0, 105.0), Cursor::N);
        assert_eq!(cursor_at(300.0, 105.5), Cursor::Default);
    }

    #[test]
    fn test_interior_has_no_override() {
        assert_eq!(cursor_at(106.0, 106.0), Cursor::Default);
        assert_eq!(cursor_at(494.0, 394.0), Cursor::Default);
        assert_eq!(Cursor::Default.css(), "");
        assert!(!Cursor::Default.is_resize());
    }

    #[test]
    fn test_css_names_and_edges() {
        assert_eq!(Cursor::NW.css(), "nw-resize");
        assert_eq!(Cursor::SE.css(), "se-resize");
        assert_eq!(Cursor::E.css(), "e-resize");
        assert_eq!(Cursor::SW.edges(), Edges::SOUTH.with(Edges::WEST));
        assert_eq!(Cursor::N.edges(), Edges::NORTH);
        assert!(Cursor::NE.edges().is_corner());
        assert!(Cursor::Default.edges().is_empty());
    }
}
