//! Resize session captured at resize start

use crate::math::{Rect, Size, Vec2};
use crate::surface::BoxPatch;
use crate::window::{EdgeOffsets, Edges, WindowOptions};
use super::fit_dimension;

/// Geometry captured when a resize starts
///
/// Every move is computed against `origin` and `offsets`, so the result only
/// depends on the current cursor position and `last`.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeSession {
    /// Edges following the cursor
    pub edges: Edges,
    /// Element rectangle at resize start
    pub origin: Rect,
    /// Cursor-to-edge offsets at resize start
    pub offsets: EdgeOffsets,
    /// Last applied size
    pub last: Size,
}

impl ResizeSession {
    /// Start a session; `last` begins at the origin size
    pub fn new(edges: Edges, origin: Rect, offsets: EdgeOffsets) -> Self {
        Self {
            edges,
            origin,
            offsets,
            last: origin.size(),
        }
    }

    /// Compute the style update for a cursor at `cursor`
    ///
    /// Edges are applied north, west, south, east. Top and left edges move the
    /// origin together with the size, keeping the opposite edge fixed when the
    /// size is clamped; bottom and right only change the size.
    pub fn apply(&mut self, cursor: Vec2, options: &WindowOptions) -> BoxPatch {
        let mut patch = BoxPatch::default();

        if self.edges.north {
            let top = cursor.y - self.offsets.top;
            if let Some(height) = self.fit_height(self.origin.bottom() - top, options) {
                patch.top = Some(self.origin.bottom() - height);
                patch.height = Some(height);
            }
        }
        if self.edges.west {
            let left = cursor.x - self.offsets.left;
            if let Some(width) = self.fit_width(self.origin.right() - left, options) {
                patch.left = Some(self.origin.right() - width);
                patch.width = Some(width);
            }
        }
        if self.edges.south {
            let height = cursor.y + self.offsets.bottom - self.origin.top();
            if let Some(height) = self.fit_height(height, options) {
                patch.height = Some(height);
            }
        }
        if self.edges.east {
            let width = cursor.x + self.offsets.right - self.origin.left();
            if let Some(width) = self.fit_width(width, options) {
                patch.width = Some(width);
            }
        }

        patch
    }

    fn fit_width(&mut self, width: f64, options: &WindowOptions) -> Option<f64> {
        let fitted = fit_dimension(width, options.min_width, options.max_width, self.last.width);
        if let Some(width) = fitted {
            self.last.width = width;
        }
        fitted
    }

    fn fit_height(&mut self, height: f64, options: &WindowOptions) -> Option<f64> {
        let fitted = fit_dimension(height, options.min_height, options.max_height, self.last.height);
        if let Some(height) = fitted {
            self.last.height = height;
        }
        fitted
    }
}
