//! Exported `Window` class

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, MouseEvent};
use crate::bus::{attach, Attachment};
use crate::error::WindowError;
use crate::input::PointerDown;
use crate::math::Vec2;
use crate::window::{Window, WindowOptions};
use super::{global_bus, log, DomSurface, GlectronHost};

type SharedWindow = Rc<RefCell<Window<DomSurface, GlectronHost>>>;

struct ElementListener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl ElementListener {
    fn add(target: &EventTarget, kind: &'static str, closure: Closure<dyn FnMut(MouseEvent)>) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for ElementListener {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
        if let Err(e) = removed {
            log(&format!("removing {} listener failed: {:?}", self.kind, e));
        }
    }
}

/// Draggable, resizable window bound to an element
#[wasm_bindgen(js_name = Window)]
pub struct WebWindow {
    inner: SharedWindow,
    attachment: Option<Attachment>,
    listeners: Vec<ElementListener>,
}

#[wasm_bindgen(js_class = Window)]
impl WebWindow {
    /// `new Window(element, options?)`
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement, options: JsValue) -> Result<WebWindow, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let options = parse_options(&options)?;
        let surface = DomSurface::new(element.clone(), &options)?;
        let window = Window::new(surface, GlectronHost, options)?;
        let inner: SharedWindow = Rc::new(RefCell::new(window));

        let mut listeners = Vec::with_capacity(2);
        let target: &EventTarget = element.as_ref();

        let hover = Rc::clone(&inner);
        listeners.push(ElementListener::add(
            target,
            "mousemove",
            Closure::wrap(Box::new(move |e: MouseEvent| {
                if let Ok(mut window) = hover.try_borrow_mut() {
                    window.on_mouse_move(screen_position(&e));
                }
            }) as Box<dyn FnMut(MouseEvent)>),
        )?);

        let press = Rc::clone(&inner);
        listeners.push(ElementListener::add(
            target,
            "mousedown",
            Closure::wrap(Box::new(move |e: MouseEvent| {
                let Ok(mut window) = press.try_borrow_mut() else {
                    return;
                };
                let target = window.surface().classify(e.target());
                let position = screen_position(&e);
                let outcome = window.on_mouse_down(PointerDown::new(position.x, position.y, target));
                if outcome.prevents_default() {
                    e.prevent_default();
                }
            }) as Box<dyn FnMut(MouseEvent)>),
        )?);

        let attachment = attach(&inner, &global_bus());

        Ok(WebWindow {
            inner,
            attachment: Some(attachment),
            listeners,
        })
    }

    pub fn show(&self) -> Result<(), JsValue> {
        self.toggle(true)
    }

    pub fn hide(&self) -> Result<(), JsValue> {
        self.toggle(false)
    }

    /// Throws when neither dimension is given
    #[wasm_bindgen(js_name = setSize)]
    pub fn set_size(&self, width: Option<f64>, height: Option<f64>) -> Result<(), JsValue> {
        self.window_mut()?.set_size(width, height)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setDraggable)]
    pub fn set_draggable(&self, draggable: bool) -> Result<(), JsValue> {
        self.window_mut()?.set_draggable(draggable);
        Ok(())
    }

    #[wasm_bindgen(js_name = setResizable)]
    pub fn set_resizable(&self, resizable: bool) -> Result<(), JsValue> {
        self.window_mut()?.set_resizable(resizable);
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = isDragging)]
    pub fn is_dragging(&self) -> Result<bool, JsValue> {
        Ok(self.window()?.is_dragging())
    }

    #[wasm_bindgen(getter, js_name = isResizing)]
    pub fn is_resizing(&self) -> Result<bool, JsValue> {
        Ok(self.window()?.is_resizing())
    }

    #[wasm_bindgen(js_name = makePopup)]
    pub fn make_popup(&self) -> Result<(), JsValue> {
        self.window()?.host().make_popup();
        Ok(())
    }

    #[wasm_bindgen(js_name = unPopup)]
    pub fn un_popup(&self) -> Result<(), JsValue> {
        self.window()?.host().un_popup();
        Ok(())
    }

    #[wasm_bindgen(js_name = isChromium)]
    pub fn is_chromium() -> bool {
        GlectronHost.is_chromium()
    }

    /// Remove every listener and stop answering hit tests
    pub fn dispose(&mut self) {
        self.listeners.clear();
        if let Some(attachment) = self.attachment.take() {
            attachment.dispose();
        }
    }
}

impl WebWindow {
    fn window(&self) -> Result<Ref<'_, Window<DomSurface, GlectronHost>>, WindowError> {
        self.inner
            .try_borrow()
            .map_err(|_| WindowError::Host("window is busy in another call".to_string()))
    }

    fn window_mut(&self) -> Result<RefMut<'_, Window<DomSurface, GlectronHost>>, WindowError> {
        self.inner
            .try_borrow_mut()
            .map_err(|_| WindowError::Host("window is busy in another call".to_string()))
    }

    /// Write visibility, release the window, then notify listeners
    fn toggle(&self, visible: bool) -> Result<(), JsValue> {
        let (event, element) = {
            let mut window = self.window_mut()?;
            let event = window.set_visible(visible);
            (event, window.surface().element().clone())
        };
        DomSurface::dispatch(&element, event);
        Ok(())
    }
}

fn screen_position(e: &MouseEvent) -> Vec2 {
    Vec2::new(e.screen_x() as f64, e.screen_y() as f64)
}

fn parse_options(options: &JsValue) -> Result<WindowOptions, WindowError> {
    if options.is_undefined() || options.is_null() {
        return Ok(WindowOptions::default());
    }
    let json: String = js_sys::JSON::stringify(options)
        .map_err(|e| WindowError::Host(format!("options are not serializable: {:?}", e)))?
        .into();
    serde_json::from_str(&json).map_err(|e| WindowError::Host(format!("invalid options: {}", e)))
}
