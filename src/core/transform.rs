use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position and XYZ Euler rotation of a scene object
///
/// Rotation angles accumulate without wrapping; only their sine and cosine
/// ever reach the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn rotate_by(&mut self, delta: Vec3) {
        self.rotation += delta;
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.quat(), self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
