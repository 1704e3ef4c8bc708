//! Geometry primitives
//!
//! All coordinates are CSS pixels in the host's global (screen) space.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
