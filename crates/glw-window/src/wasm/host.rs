//! Glectron host API bindings

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::host::{HitTestCallback, HitTestQuery, Host};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = glectron, js_name = mouseCapture)]
    fn glectron_mouse_capture(enabled: bool);

    #[wasm_bindgen(js_namespace = glectron, js_name = globalMouseMove)]
    fn glectron_global_mouse_move(enabled: bool);

    #[wasm_bindgen(js_namespace = glectron, js_name = onHitTest)]
    fn glectron_on_hit_test(callback: &js_sys::Function);

    #[wasm_bindgen(js_namespace = glectron, js_name = makePopup)]
    fn glectron_make_popup();

    #[wasm_bindgen(js_namespace = glectron, js_name = unPopup)]
    fn glectron_un_popup();
}

/// The global `glectron` object
#[derive(Clone, Copy, Debug, Default)]
pub struct GlectronHost;

impl GlectronHost {
    /// Turn the host window into a popup
    pub fn make_popup(&self) {
        glectron_make_popup();
    }

    /// Undo [`GlectronHost::make_popup`]
    pub fn un_popup(&self) {
        glectron_un_popup();
    }

    /// Whether the host renders with Chromium
    pub fn is_chromium(&self) -> bool {
        let global = js_sys::global();
        js_sys::Reflect::get(&global, &"glectron".into())
            .and_then(|g| js_sys::Reflect::get(&g, &"isChromium".into()))
            .map(|v| v.is_truthy())
            .unwrap_or(false)
    }
}

impl Host for GlectronHost {
    fn mouse_capture(&self, enabled: bool) {
        glectron_mouse_capture(enabled);
    }

    fn global_mouse_move(&self, enabled: bool) {
        glectron_global_mouse_move(enabled);
    }

    fn on_hit_test(&self, callback: HitTestCallback) {
        let closure = Closure::wrap(Box::new(move |width: f64, height: f64, x: f64, y: f64| {
            callback(HitTestQuery { width, height, x, y })
        }) as Box<dyn Fn(f64, f64, f64, f64) -> bool>);
        glectron_on_hit_test(closure.as_ref().unchecked_ref());
        // The host keeps the callback for the page lifetime.
        closure.forget();
    }
}
