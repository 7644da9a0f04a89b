use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

use super::surface::SurfaceSize;

pub const DEFAULT_FOV_DEGREES: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Point projected into surface pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub pixel: Vec2,
    /// Distance in front of the camera along its view axis
    pub depth: f32,
}

/// Right-handed perspective camera looking down -Z by default
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov_degrees,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Camera with the page's standard lens, sized for `surface`
    pub fn for_surface(surface: SurfaceSize) -> Self {
        Self::new(DEFAULT_FOV_DEGREES, surface.aspect(), DEFAULT_NEAR, DEFAULT_FAR)
    }

    /// Recompute the projection after changing fov, aspect or clip planes
    pub fn update_projection_matrix(&mut self) {
        self.projection =
            Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    /// Project a world-space point; `None` when it is behind the near plane
    pub fn project(&self, view_projection: &Mat4, world: Vec3, surface: SurfaceSize) -> Option<Projected> {
        let clip = *view_projection * world.extend(1.0);
        if clip.w < self.near {
            return None;
        }

        let ndc = clip.xyz() / clip.w;
        let pixel = Vec2::new(
            (ndc.x + 1.0) * 0.5 * surface.width as f32,
            (1.0 - ndc.y) * 0.5 * surface.height as f32,
        );

        Some(Projected { pixel, depth: clip.w })
    }

    /// On-screen radius in pixels of a world-space radius at `depth`
    pub fn pixel_radius(&self, world_radius: f32, depth: f32, surface: SurfaceSize) -> f32 {
        let half_fov = (self.fov_degrees.to_radians() * 0.5).tan();
        world_radius * surface.height as f32 / (2.0 * half_fov * depth.max(self.near))
    }
}
