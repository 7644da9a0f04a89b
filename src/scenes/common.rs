use glam::{Mat4, Vec3};

use crate::core::{Color, DrawOp, PerspectiveCamera, SurfaceSize};

/// Surface material: a tint drawn at a fixed opacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub tint: Color,
    pub opacity: f32,
}

impl Material {
    pub fn new(tint: Color, opacity: f32) -> Self {
        Self { tint, opacity }
    }

    pub fn color(&self) -> Color {
        self.tint.with_alpha(self.opacity)
    }
}

/// Per-frame projection state shared by a scene's draw list builders
pub struct Projector<'a> {
    camera: &'a PerspectiveCamera,
    view_projection: Mat4,
    surface: SurfaceSize,
}

impl<'a> Projector<'a> {
    pub fn new(camera: &'a PerspectiveCamera, surface: SurfaceSize) -> Self {
        Self {
            camera,
            view_projection: camera.view_projection(),
            surface,
        }
    }

    /// Line op for a world-space segment; dropped if either end is behind
    /// the camera
    pub fn segment(&self, a: Vec3, b: Vec3, color: Color) -> Option<DrawOp> {
        let from = self.camera.project(&self.view_projection, a, self.surface)?;
        let to = self.camera.project(&self.view_projection, b, self.surface)?;
        Some(DrawOp::Line {
            from: from.pixel,
            to: to.pixel,
            color,
        })
    }

    /// Disc op for a sphere of `world_radius` centred at `center`
    pub fn sphere(&self, center: Vec3, world_radius: f32, color: Color) -> Option<DrawOp> {
        let p = self.camera.project(&self.view_projection, center, self.surface)?;
        Some(DrawOp::Point {
            at: p.pixel,
            radius: self.camera.pixel_radius(world_radius, p.depth, self.surface),
            color,
        })
    }

    /// Disc op for a size-attenuated point sprite of `size` world units
    pub fn sprite(&self, center: Vec3, size: f32, color: Color) -> Option<DrawOp> {
        let p = self.camera.project(&self.view_projection, center, self.surface)?;
        let diameter = size * (self.surface.height as f32 * 0.5) / p.depth;
        Some(DrawOp::Point {
            at: p.pixel,
            radius: diameter * 0.5,
            color,
        })
    }
}
