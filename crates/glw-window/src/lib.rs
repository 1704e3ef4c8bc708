//! Draggable and resizable chrome-less windows for Glectron shells
//!
//! A [`Window`] binds to one element, shows resize cursors near its edges,
//! and turns mouse-down/move sequences into titlebar drags or edge resizes.
//! OS-level pointer capture and global move tracking are delegated to the
//! [`Host`]; the host's broadcasts reach windows through a [`HostEventBus`].
//!
//! The core is host-agnostic. The `wasm` feature binds it to the browser DOM
//! and the global `glectron` object.

pub mod bus;
pub mod error;
pub mod host;
pub mod input;
pub mod math;
pub mod surface;
pub mod window;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use bus::{attach, Attachment, HostEvent, HostEventBus, MouseDetail, Subscription};
pub use error::WindowError;
pub use host::{HitTestCallback, HitTestQuery, Host};
pub use input::{Gesture, PointerDown, PointerOutcome, PointerTarget, ResizeSession};
pub use math::{Rect, Size, Vec2};
pub use surface::{BoxPatch, Surface, WindowEvent};
pub use window::{Cursor, EdgeOffsets, Edges, Window, WindowOptions, WindowOptionsPatch};
