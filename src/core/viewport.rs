use super::camera::PerspectiveCamera;
use super::canvas::{Canvas, DrawOp};
use super::surface::SurfaceSize;

/// Camera plus the output surface a scene draws into
pub struct Viewport {
    pub camera: PerspectiveCamera,
    canvas: Canvas,
    draw_calls: u64,
}

impl Viewport {
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            camera: PerspectiveCamera::for_surface(surface),
            canvas: Canvas::new(surface.width, surface.height),
            draw_calls: 0,
        }
    }

    /// Match the camera projection and output surface to a new size
    pub fn resize(&mut self, surface: SurfaceSize) {
        self.camera.set_aspect(surface.aspect());
        self.canvas.resize(surface.width, surface.height);
    }

    /// Submit one frame's draw list
    pub fn draw(&mut self, ops: &[DrawOp]) {
        self.canvas.execute(ops);
        self.draw_calls += 1;
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.canvas.size()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;

    #[test]
    fn test_resize_updates_camera_and_canvas() {
        let mut viewport = Viewport::new(SurfaceSize::new(100, 100));
        viewport.resize(SurfaceSize::new(300, 150));

        assert_eq!(viewport.surface_size(), SurfaceSize::new(300, 150));
        assert!((viewport.camera.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_draw_counts_calls() {
        let mut viewport = Viewport::new(SurfaceSize::new(4, 4));
        viewport.draw(&[DrawOp::Clear(Color::WHITE)]);
        viewport.draw(&[]);

        assert_eq!(viewport.draw_calls(), 2);
        assert_eq!(viewport.canvas().coverage(), 16);
    }
}
