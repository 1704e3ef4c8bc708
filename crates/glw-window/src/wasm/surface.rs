//! DOM element surface

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, HtmlElement, Node};
use crate::error::WindowError;
use crate::input::PointerTarget;
use crate::math::{Rect, Vec2};
use crate::surface::{BoxPatch, Surface, WindowEvent};
use crate::window::{Cursor, WindowOptions};
use super::log;

/// An `HTMLElement` with a titlebar child
#[derive(Clone, Debug)]
pub struct DomSurface {
    element: HtmlElement,
    titlebar: HtmlElement,
    no_drag_selector: String,
}

impl DomSurface {
    /// Find the titlebar inside `element`
    pub fn new(element: HtmlElement, options: &WindowOptions) -> Result<Self, WindowError> {
        let titlebar = element
            .query_selector(&options.titlebar_selector)
            .map_err(|e| WindowError::Host(format!("{:?}", e)))?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| WindowError::MissingTitlebar {
                selector: options.titlebar_selector.clone(),
            })?;

        Ok(Self {
            element,
            titlebar,
            no_drag_selector: options.titlebar_no_drag_selector.clone(),
        })
    }

    #[inline]
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// Classify a mouse-down target
    pub fn classify(&self, target: Option<EventTarget>) -> PointerTarget {
        let Some(node) = target.and_then(|t| t.dyn_into::<Node>().ok()) else {
            return PointerTarget::Body;
        };
        if !self.titlebar.contains(Some(&node)) {
            return PointerTarget::Body;
        }
        let no_drag = node
            .dyn_ref::<Element>()
            .and_then(|el| el.closest(&self.no_drag_selector).ok().flatten())
            .is_some();
        if no_drag {
            PointerTarget::TitlebarNoDrag
        } else {
            PointerTarget::Titlebar
        }
    }

    /// Dispatch a window event on `element`
    ///
    /// Listeners run synchronously, before this returns.
    pub fn dispatch(element: &HtmlElement, event: WindowEvent) {
        let dispatched = Event::new(event.name()).and_then(|e| element.dispatch_event(&e));
        if let Err(e) = dispatched {
            log(&format!("dispatch {} failed: {:?}", event.name(), e));
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.element.style().set_property(property, value) {
            log(&format!("set {}={} failed: {:?}", property, value, e));
        }
    }
}

fn rect_of(element: &HtmlElement) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.x(), r.y(), r.width(), r.height())
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

impl Surface for DomSurface {
    fn bounds(&self) -> Rect {
        rect_of(&self.element)
    }

    fn titlebar_bounds(&self) -> Option<Rect> {
        Some(rect_of(&self.titlebar))
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.set_style("cursor", cursor.css());
    }

    fn apply(&mut self, patch: &BoxPatch) {
        if let Some(left) = patch.left {
            self.set_style("left", &px(left));
        }
        if let Some(top) = patch.top {
            self.set_style("top", &px(top));
        }
        if let Some(width) = patch.width {
            self.set_style("width", &px(width));
        }
        if let Some(height) = patch.height {
            self.set_style("height", &px(height));
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.set_style("visibility", if visible { "visible" } else { "hidden" });
    }

    fn emit(&mut self, event: WindowEvent) {
        Self::dispatch(&self.element, event);
    }

    fn contains_point(&self, point: Vec2) -> bool {
        let Some(document) = self.element.owner_document() else {
            return false;
        };
        let element: &JsValue = self.element.as_ref();
        document
            .elements_from_point(point.x as f32, point.y as f32)
            .iter()
            .any(|el| &el == element)
    }
}
