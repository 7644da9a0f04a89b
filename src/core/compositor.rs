use super::canvas::{Canvas, DrawOp};
use super::color::Color;
use super::surface::SurfaceSize;

/// One scene canvas placed on the page frame
pub struct Layer<'a> {
    pub canvas: &'a Canvas,
    /// Top-left corner in frame pixels; may be off-screen
    pub origin: (i32, i32),
}

impl<'a> Layer<'a> {
    pub fn new(canvas: &'a Canvas, origin: (i32, i32)) -> Self {
        Self { canvas, origin }
    }
}

/// Composes scene canvases over a page background into one frame
pub struct Compositor {
    frame: Canvas,
    background: Color,
}

impl Compositor {
    pub fn new(size: SurfaceSize, background: Color) -> Self {
        Self {
            frame: Canvas::new(size.width, size.height),
            background,
        }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.frame.resize(size.width, size.height);
    }

    /// Clear to the background and blit layers in order; later layers land on top
    pub fn compose(&mut self, layers: Vec<Layer<'_>>) -> &Canvas {
        self.frame.execute(&[DrawOp::Clear(self.background)]);

        for layer in layers {
            if !self.is_visible(&layer) {
                continue;
            }
            layer
                .canvas
                .blit_onto(&mut self.frame, layer.origin.0, layer.origin.1);
        }

        &self.frame
    }

    fn is_visible(&self, layer: &Layer<'_>) -> bool {
        let size = layer.canvas.size();
        let frame = self.frame.size();
        let (x, y) = layer.origin;

        x < frame.width as i32
            && y < frame.height as i32
            && x + size.width as i32 > 0
            && y + size.height as i32 > 0
    }

    pub fn frame(&self) -> &Canvas {
        &self.frame
    }
}
