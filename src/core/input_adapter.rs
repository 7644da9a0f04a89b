use glam::Vec2;
use winit::event::{MouseScrollDelta, WindowEvent};

use super::surface::SurfaceSize;

/// Pixels scrolled per wheel notch
pub const LINE_HEIGHT: f32 = 40.0;

/// Page-level input distilled from window events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// Cursor position in physical window pixels
    PointerMoved(Vec2),
    PointerLeft,
    /// Positive values scroll the page down
    Scrolled(f32),
    Resized(SurfaceSize),
}

/// Adapter that turns winit window events into page events
#[derive(Debug, Clone, Copy, Default)]
pub struct InputAdapter;

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one window event; `None` for events the page ignores
    pub fn process_event(&self, event: &WindowEvent) -> Option<PageEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(PageEvent::PointerMoved(Vec2::new(
                position.x as f32,
                position.y as f32,
            ))),
            WindowEvent::CursorLeft { .. } => Some(PageEvent::PointerLeft),
            WindowEvent::MouseWheel { delta, .. } => Some(PageEvent::Scrolled(scroll_amount(*delta))),
            WindowEvent::Resized(size) => Some(PageEvent::Resized(SurfaceSize::new(size.width, size.height))),
            _ => None,
        }
    }
}

/// Page scroll distance in pixels for a wheel or touchpad delta
pub fn scroll_amount(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, lines) => -lines * LINE_HEIGHT,
        MouseScrollDelta::PixelDelta(position) => -position.y as f32,
    }
}
