//! Window-level host event listeners

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Event};
use crate::math::Vec2;
use crate::bus::{HostEvent, HostEventBus, MouseDetail, CAPTURE_MOUSE_RELEASE, GLOBAL_MOUSE_MOVE};
use super::log;

thread_local! {
    static BUS: HostEventBus = HostEventBus::new();
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// The page-wide host event bus
///
/// The first call installs the `globalmousemove` and `capturemouserelease`
/// listeners on the global `window`.
pub fn global_bus() -> HostEventBus {
    if !INSTALLED.with(Cell::get) {
        match install() {
            Ok(()) => INSTALLED.with(|i| i.set(true)),
            Err(e) => log(&format!("installing host listeners failed: {:?}", e)),
        }
    }
    BUS.with(HostEventBus::clone)
}

fn install() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

    let on_move = Closure::wrap(Box::new(|event: Event| {
        match parse_mouse_detail(&event) {
            Some(detail) => publish(HostEvent::from(detail)),
            None => log("globalmousemove without a valid {x, y} detail dropped"),
        }
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback(GLOBAL_MOUSE_MOVE, on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_release = Closure::wrap(Box::new(|_event: Event| {
        publish(HostEvent::CaptureMouseRelease);
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback(CAPTURE_MOUSE_RELEASE, on_release.as_ref().unchecked_ref())?;
    on_release.forget();

    Ok(())
}

fn publish(event: HostEvent) {
    // Clone the handle first so handlers may reach the bus themselves.
    let bus = BUS.with(HostEventBus::clone);
    bus.publish(&event);
}

fn parse_mouse_detail(event: &Event) -> Option<MouseDetail> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    let json: String = js_sys::JSON::stringify(&detail).ok()?.into();
    let detail: MouseDetail = serde_json::from_str(&json).ok()?;
    Vec2::new(detail.x, detail.y).is_finite().then_some(detail)
}
