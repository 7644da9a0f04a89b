use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::common::{Material, Projector};
use super::palette::SHAPE_TINTS;
use crate::core::{
    Color, DrawOp, GeometryKind, SceneController, SceneName, SceneRng, SurfaceSize, Transform,
    Viewport, Wireframe,
};

pub const DEFAULT_SHAPE_COUNT: usize = 12;

/// Full extent of the box initial positions are drawn from
const SPAWN_SPAN: Vec3 = Vec3::new(20.0, 15.0, 10.0);
const MAX_ROTATION_RATE: f32 = 0.01;
const FLOAT_AMPLITUDE_Y: f32 = 0.5;
const FLOAT_AMPLITUDE_X: f32 = 0.3;
const SHAPE_OPACITY: f32 = 0.6;

const CAMERA_DISTANCE: f32 = 15.0;
const PARALLAX_RANGE: f32 = 2.0;
const PARALLAX_EASING: f32 = 0.05;

/// A free-floating rotating solid
#[derive(Debug, Clone)]
pub struct ShapeEntity {
    pub kind: GeometryKind,
    pub material: Material,
    initial_position: Vec3,
    pub transform: Transform,
    /// Radians added to each rotation axis per frame
    pub rotation_rate: Vec3,
    pub float_phase: f32,
}

impl ShapeEntity {
    fn spawn(rng: &mut SceneRng) -> Self {
        let kind = GeometryKind::ALL[rng.index(GeometryKind::ALL.len())];
        let tint = SHAPE_TINTS[rng.index(SHAPE_TINTS.len())];
        let initial_position = rng.centered_vec3(SPAWN_SPAN);

        let rotation = Vec3::new(rng.up_to(PI), rng.up_to(PI), rng.up_to(PI));
        let span = MAX_ROTATION_RATE * 2.0;
        let rotation_rate = Vec3::new(rng.centered(span), rng.centered(span), rng.centered(span));
        let float_phase = rng.up_to(TAU);

        Self {
            kind,
            material: Material::new(tint, SHAPE_OPACITY),
            initial_position,
            transform: Transform {
                position: initial_position,
                rotation,
            },
            rotation_rate,
            float_phase,
        }
    }

    /// Anchor the float offset is measured from; fixed at creation
    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.transform.rotation
    }

    fn step(&mut self, elapsed: f32) {
        self.transform.rotate_by(self.rotation_rate);

        let t = elapsed + self.float_phase;
        self.transform.position.y = self.initial_position.y + t.sin() * FLOAT_AMPLITUDE_Y;
        self.transform.position.x = self.initial_position.x + (t * 0.5).cos() * FLOAT_AMPLITUDE_X;
    }
}

/// The hero's set of floating shapes
#[derive(Debug, Clone)]
pub struct ShapeField {
    entities: Vec<ShapeEntity>,
}

impl ShapeField {
    pub fn build(count: usize, rng: &mut SceneRng) -> Self {
        Self {
            entities: (0..count).map(|_| ShapeEntity::spawn(rng)).collect(),
        }
    }

    /// Advance every shape to wall-clock time `elapsed`
    pub fn update(&mut self, elapsed: f32) {
        for entity in &mut self.entities {
            entity.step(elapsed);
        }
    }

    pub fn entities(&self) -> &[ShapeEntity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Map a cursor position local to a surface into [-1, 1] with +y up
pub fn normalized_pointer(local: Vec2, surface: SurfaceSize) -> Vec2 {
    Vec2::new(
        local.x / surface.width.max(1) as f32 * 2.0 - 1.0,
        -(local.y / surface.height.max(1) as f32) * 2.0 + 1.0,
    )
}

/// Hero scene controller: shape field plus pointer parallax camera
pub struct HeroScene {
    field: ShapeField,
    wireframes: Vec<(GeometryKind, Wireframe)>,
    viewport: Viewport,
    pointer: Vec2,
    draw_list: Vec<DrawOp>,
}

impl HeroScene {
    pub fn new(field: ShapeField, surface: SurfaceSize) -> Self {
        let mut viewport = Viewport::new(surface);
        viewport.camera.position = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);
        viewport.camera.look_at(Vec3::ZERO);

        Self {
            field,
            wireframes: GeometryKind::ALL.iter().map(|k| (*k, k.wireframe())).collect(),
            viewport,
            pointer: Vec2::ZERO,
            draw_list: Vec::new(),
        }
    }

    pub fn field(&self) -> &ShapeField {
        &self.field
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Ease the camera toward the pointer target and re-aim at the origin
    fn ease_camera(&mut self) {
        let camera = &mut self.viewport.camera;
        camera.position.x += (self.pointer.x * PARALLAX_RANGE - camera.position.x) * PARALLAX_EASING;
        camera.position.y += (-self.pointer.y * PARALLAX_RANGE - camera.position.y) * PARALLAX_EASING;
        camera.look_at(Vec3::ZERO);
    }

    fn wireframe(&self, kind: GeometryKind) -> Option<&Wireframe> {
        self.wireframes.iter().find(|(k, _)| *k == kind).map(|(_, w)| w)
    }
}

impl SceneController for HeroScene {
    fn name(&self) -> SceneName {
        SceneName::Hero
    }

    fn update(&mut self, elapsed: f32) {
        self.field.update(elapsed);
        self.ease_camera();
    }

    fn render(&mut self) {
        let mut ops = std::mem::take(&mut self.draw_list);
        ops.clear();
        ops.push(DrawOp::Clear(Color::TRANSPARENT));

        {
            let projector = Projector::new(&self.viewport.camera, self.viewport.surface_size());
            for entity in self.field.entities() {
                let Some(wireframe) = self.wireframe(entity.kind) else {
                    continue;
                };
                let model = entity.transform.matrix();
                let color = entity.material.color();

                ops.extend(wireframe.segments().filter_map(|(a, b)| {
                    projector.segment(model.transform_point3(a), model.transform_point3(b), color)
                }));
            }
        }

        self.viewport.draw(&ops);
        self.draw_list = ops;
    }

    fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    fn pointer_moved(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }
}
