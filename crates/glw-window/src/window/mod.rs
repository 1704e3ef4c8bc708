//! Window behavior module
//!
//! Provides the draggable/resizable window, its options and cursor logic.

#[allow(clippy::module_inception)]
mod window;
mod options;
mod cursor;
mod edges;

pub use window::Window;
pub use options::{
    WindowOptions, WindowOptionsPatch, DEFAULT_NO_DRAG_SELECTOR, DEFAULT_RESIZE_REGION_WIDTH,
    DEFAULT_TITLEBAR_SELECTOR,
};
pub use cursor::Cursor;
pub use edges::{EdgeOffsets, Edges};
