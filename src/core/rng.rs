use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for scene placement
///
/// Wraps a seedable generator so the same seed always builds the same
/// scenes.
pub struct SceneRng {
    inner: StdRng,
}

impl SceneRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Uniform in [0, 1)
    pub fn unit(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Uniform in [0, max)
    pub fn up_to(&mut self, max: f32) -> f32 {
        self.unit() * max
    }

    /// Uniform in [-span / 2, span / 2)
    pub fn centered(&mut self, span: f32) -> f32 {
        (self.unit() - 0.5) * span
    }

    /// Vector with each axis drawn from `centered` with its own span
    pub fn centered_vec3(&mut self, span: Vec3) -> Vec3 {
        let x = self.centered(span.x);
        let y = self.centered(span.y);
        let z = self.centered(span.z);
        Vec3::new(x, y, z)
    }

    /// Uniform index into a collection of `len` items
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Fair coin
    pub fn coin(&mut self) -> bool {
        self.unit() > 0.5
    }
}
