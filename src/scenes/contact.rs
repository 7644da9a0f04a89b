use glam::Vec3;

use super::common::Projector;
use super::palette::ACCENTS;
use crate::core::{Color, DrawOp, SceneController, SceneName, SceneRng, SurfaceSize, Transform, Viewport};

pub const DEFAULT_PARTICLE_COUNT: usize = 1000;

const SPAWN_SPAN: Vec3 = Vec3::new(50.0, 50.0, 30.0);
/// Particles falling below this are recycled to `SPAWN_HEIGHT`
pub const RESET_THRESHOLD: f32 = -25.0;
pub const SPAWN_HEIGHT: f32 = 25.0;
pub const FALL_STEP: f32 = 0.02;
const CLOUD_SPIN: Vec3 = Vec3::new(0.001, 0.002, 0.0);

const POINT_SIZE: f32 = 0.1;
const POINT_OPACITY: f32 = 0.6;
const CAMERA_DISTANCE: f32 = 20.0;

/// Falling point cloud with fixed-size position and colour buffers
#[derive(Debug, Clone)]
pub struct ParticleField {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    /// Rotation of the cloud as a whole
    pub transform: Transform,
    needs_update: bool,
    version: u64,
}

impl ParticleField {
    pub fn build(count: usize, rng: &mut SceneRng) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);

        for _ in 0..count {
            positions.push(rng.centered_vec3(SPAWN_SPAN).to_array());
            let tint = if rng.coin() { ACCENTS[0] } else { ACCENTS[1] };
            colors.push(tint.to_rgb());
        }

        Self::from_buffers(positions, colors)
    }

    /// Field over caller-supplied buffers; lengths must match
    pub fn from_buffers(positions: Vec<[f32; 3]>, colors: Vec<[f32; 3]>) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        Self {
            positions,
            colors,
            transform: Transform::IDENTITY,
            needs_update: true,
            version: 0,
        }
    }

    /// Spin the cloud, drop every particle one step and recycle the ones
    /// that fell through the floor. Mutates the buffer in place.
    pub fn update(&mut self) {
        self.transform.rotate_by(CLOUD_SPIN);

        for position in &mut self.positions {
            position[1] -= FALL_STEP;
            if position[1] < RESET_THRESHOLD {
                position[1] = SPAWN_HEIGHT;
            }
        }

        self.needs_update = true;
        self.version += 1;
    }

    /// Consume the changed flag; true if positions moved since last call
    pub fn take_needs_update(&mut self) -> bool {
        std::mem::replace(&mut self.needs_update, false)
    }

    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Number of in-place position updates so far
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Contact scene controller
pub struct ContactScene {
    field: ParticleField,
    viewport: Viewport,
    draw_list: Vec<DrawOp>,
    uploads: u64,
}

impl ContactScene {
    pub fn new(field: ParticleField, surface: SurfaceSize) -> Self {
        let mut viewport = Viewport::new(surface);
        viewport.camera.position = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);
        viewport.camera.look_at(Vec3::ZERO);

        Self {
            field,
            viewport,
            draw_list: Vec::new(),
            uploads: 0,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// How many frames re-read a changed position buffer
    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    /// Rebuild the point list from the position buffer
    fn rebuild_points(&mut self) {
        self.draw_list.clear();
        self.draw_list.push(DrawOp::Clear(Color::TRANSPARENT));

        let projector = Projector::new(&self.viewport.camera, self.viewport.surface_size());
        let model = self.field.transform.matrix();

        let points = self
            .field
            .positions()
            .iter()
            .zip(self.field.colors())
            .filter_map(|(position, rgb)| {
                let world = model.transform_point3(Vec3::from_array(*position));
                projector.sprite(world, POINT_SIZE, Color::from_rgb(*rgb, POINT_OPACITY))
            });
        self.draw_list.extend(points);
    }
}

impl SceneController for ContactScene {
    fn name(&self) -> SceneName {
        SceneName::Contact
    }

    fn update(&mut self, _elapsed: f32) {
        self.field.update();
    }

    fn render(&mut self) {
        if self.field.take_needs_update() {
            self.rebuild_points();
            self.uploads += 1;
        }
        self.viewport.draw(&self.draw_list);
    }

    fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_respects_ranges() {
        let mut rng = SceneRng::seeded(21);
        let field = ParticleField::build(DEFAULT_PARTICLE_COUNT, &mut rng);

        assert_eq!(field.len(), DEFAULT_PARTICLE_COUNT);
        assert_eq!(field.colors().len(), DEFAULT_PARTICLE_COUNT);
        for p in field.positions() {
            assert!(p[0].abs() <= 25.0 && p[1].abs() <= 25.0 && p[2].abs() <= 15.0);
        }
        for c in field.colors() {
            assert!(*c == ACCENTS[0].to_rgb() || *c == ACCENTS[1].to_rgb());
        }
    }

    #[test]
    fn test_update_spins_and_marks_changed() {
        let mut field = ParticleField::from_buffers(vec![[0.0, 0.0, 0.0]], vec![[1.0, 1.0, 1.0]]);
        assert!(field.take_needs_update());
        assert!(!field.needs_update());

        field.update();
        assert!(field.needs_update());
        assert_eq!(field.version(), 1);
        assert!((field.transform.rotation.x - 0.001).abs() < 1e-9);
        assert!((field.transform.rotation.y - 0.002).abs() < 1e-9);
        assert!((field.positions()[0][1] + 0.02).abs() < 1e-7);
    }

    #[test]
    fn test_buffer_is_never_reallocated() {
        let mut rng = SceneRng::seeded(2);
        let mut field = ParticleField::build(100, &mut rng);
        let ptr = field.positions().as_ptr();

        for _ in 0..5000 {
            field.update();
        }

        assert_eq!(field.positions().as_ptr(), ptr);
        assert_eq!(field.len(), 100);
        assert_eq!(field.position_bytes().len(), 100 * 12);
    }

    #[test]
    fn test_render_consumes_update_flag_each_frame() {
        let mut rng = SceneRng::seeded(8);
        let mut scene = ContactScene::new(ParticleField::build(200, &mut rng), SurfaceSize::new(160, 120));

        for _ in 0..3 {
            scene.update(0.0);
            scene.render();
        }

        assert_eq!(scene.uploads(), 3);
        assert_eq!(scene.viewport().draw_calls(), 3);
        assert!(!scene.field().needs_update());
        assert!(scene.viewport().canvas().coverage() > 0);
    }
}
