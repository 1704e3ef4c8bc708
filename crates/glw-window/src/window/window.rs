//! Window bound to a single surface

use tracing::{debug, trace};
use crate::bus::HostEvent;
use crate::error::WindowError;
use crate::host::Host;
use crate::input::{Gesture, PointerDown, PointerOutcome, PointerTarget, ResizeSession};
use crate::math::Vec2;
use crate::surface::{BoxPatch, Surface, WindowEvent};
use super::{Cursor, EdgeOffsets, WindowOptions};

/// Draggable, resizable chrome-less window
///
/// Pointer events from the bound element arrive through [`Window::on_mouse_move`]
/// and [`Window::on_mouse_down`]; host broadcasts arrive through
/// [`Window::on_host_event`]. A gesture only ends when the host reports the
/// capture release.
pub struct Window<S: Surface, H: Host> {
    surface: S,
    host: H,
    options: WindowOptions,
    gesture: Gesture,
    /// Cursor currently shown over the element
    cursor: Cursor,
}

impl<S: Surface, H: Host> Window<S, H> {
    /// Bind a window to `surface`
    ///
    /// Applies the initial size from `options` and leaves the window hidden.
    pub fn new(surface: S, host: H, options: WindowOptions) -> Result<Self, WindowError> {
        options.validate()?;
        if surface.titlebar_bounds().is_none() {
            return Err(WindowError::MissingTitlebar {
                selector: options.titlebar_selector.clone(),
            });
        }

        let mut window = Self {
            surface,
            host,
            options,
            gesture: Gesture::Idle,
            cursor: Cursor::Default,
        };

        let width = provided(window.options.width);
        let height = provided(window.options.height);
        if width.is_some() || height.is_some() {
            window.set_size(width, height)?;
        }

        window.hide();
        debug!(titlebar = %window.options.titlebar_selector, "window bound");
        Ok(window)
    }

    /// Current gesture
    #[inline]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.gesture.is_resizing()
    }

    /// Cursor override currently applied
    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Update the resize cursor for a pointer hovering at `position`
    pub fn on_mouse_move(&mut self, position: Vec2) {
        if !self.gesture.is_idle() || !self.options.resizable {
            return;
        }
        let offsets = EdgeOffsets::measure(&self.surface.bounds(), position);
        self.cursor = Cursor::from_offsets(&offsets, self.options.resize_region_width);
        self.surface.set_cursor(self.cursor);
    }

    /// Start a drag or resize for a mouse-down on the element
    ///
    /// The titlebar is consulted first, then the resize border.
    pub fn on_mouse_down(&mut self, event: PointerDown) -> PointerOutcome {
        if event.target != PointerTarget::Body && self.start_drag(event) {
            return PointerOutcome::DragStarted;
        }
        if self.start_resize(event.position) {
            return PointerOutcome::ResizeStarted;
        }
        PointerOutcome::Ignored
    }

    fn start_drag(&mut self, event: PointerDown) -> bool {
        if self.cursor.is_resize() || !self.gesture.is_idle() || !self.options.draggable {
            return false;
        }
        if event.target == PointerTarget::TitlebarNoDrag {
            return false;
        }
        let titlebar = match self.surface.titlebar_bounds() {
            Some(rect) => rect,
            None => return false,
        };

        let offset = event.position - titlebar.origin();
        self.gesture = Gesture::Dragging { offset };
        self.host.mouse_capture(true);
        self.host.global_mouse_move(true);
        debug!(offset_x = offset.x, offset_y = offset.y, "drag started");
        true
    }

    fn start_resize(&mut self, position: Vec2) -> bool {
        if !self.options.resizable || !self.gesture.is_idle() || !self.cursor.is_resize() {
            return false;
        }

        let origin = self.surface.bounds();
        let edges = self.cursor.edges();
        let session = ResizeSession::new(edges, origin, EdgeOffsets::measure(&origin, position));
        self.gesture = Gesture::Resizing(session);
        self.host.global_mouse_move(true);
        self.host.mouse_capture(true);
        debug!(cursor = self.cursor.css(), "resize started");
        true
    }

    /// Dispatch a host broadcast
    pub fn on_host_event(&mut self, event: &HostEvent) {
        match *event {
            HostEvent::GlobalMouseMove { x, y } => self.on_global_mouse_move(Vec2::new(x, y)),
            HostEvent::CaptureMouseRelease => self.on_capture_release(),
        }
    }

    /// Follow the cursor while a gesture is active
    pub fn on_global_mouse_move(&mut self, position: Vec2) {
        let patch = match &mut self.gesture {
            Gesture::Idle => return,
            Gesture::Dragging { offset } => {
                let origin = position - *offset;
                BoxPatch::position(origin.x, origin.y)
            }
            Gesture::Resizing(session) => session.apply(position, &self.options),
        };

        if !patch.is_empty() {
            trace!(?patch, "gesture move");
            self.surface.apply(&patch);
        }
    }

    /// End any gesture and release host capture
    ///
    /// Runs unconditionally, even when no gesture is active.
    pub fn on_capture_release(&mut self) {
        self.host.global_mouse_move(false);
        self.host.mouse_capture(false);
        if !self.gesture.is_idle() {
            debug!(from = self.gesture.name(), "gesture ended");
        }
        self.gesture = Gesture::Idle;
    }

    pub fn show(&mut self) {
        let event = self.set_visible(true);
        self.surface.emit(event);
    }

    pub fn hide(&mut self) {
        let event = self.set_visible(false);
        self.surface.emit(event);
    }

    /// Write visibility without notifying
    ///
    /// Returns the event the caller must emit. Callers holding the window in
    /// a shared cell use this to dispatch after releasing their borrow, since
    /// listeners may call back into the window.
    pub fn set_visible(&mut self, visible: bool) -> WindowEvent {
        self.surface.set_visible(visible);
        if visible {
            WindowEvent::Show
        } else {
            WindowEvent::Hide
        }
    }

    /// Set width and/or height in pixels
    ///
    /// Zero counts as not provided. Fails without touching the surface when
    /// neither dimension is provided.
    pub fn set_size(&mut self, width: Option<f64>, height: Option<f64>) -> Result<(), WindowError> {
        let width = provided(width);
        let height = provided(height);
        if width.is_none() && height.is_none() {
            return Err(WindowError::MissingDimensions);
        }
        self.surface.apply(&BoxPatch::size(width, height));
        Ok(())
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.options.draggable = draggable;
    }

    pub fn set_resizable(&mut self, resizable: bool) {
        self.options.resizable = resizable;
    }

    /// Check whether the window occupies `point`
    pub fn hit_test(&self, point: Vec2) -> bool {
        self.surface.contains_point(point)
    }
}

fn provided(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
