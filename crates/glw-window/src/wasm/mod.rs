//! Browser binding
//!
//! Binds the core to the DOM and the global `glectron` host object:
//! - `host`: `wasm_bindgen` externs for the Glectron API
//! - `surface`: the bound `HTMLElement` and its titlebar
//! - `listeners`: the thread-wide bus fed by window-level custom events
//! - `window`: the exported `Window` class

mod host;
mod surface;
mod listeners;
mod window;

pub use host::GlectronHost;
pub use surface::DomSurface;
pub use listeners::global_bus;
pub use window::WebWindow;

use wasm_bindgen::prelude::*;
use crate::error::WindowError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

pub(crate) fn log(msg: &str) {
    console_log(&format!("[glw-window] {}", msg));
}

impl From<WindowError> for JsValue {
    fn from(e: WindowError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
