/// Displayed size of an output surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; a zero height yields an aspect of 1
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total size in bytes for RGBA buffer
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * 4
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
