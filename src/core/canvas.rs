use glam::Vec2;

use super::color::Color;
use super::surface::SurfaceSize;

/// 2D drawing operations for canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    /// Fill entire canvas with color, replacing what was there
    Clear(Color),

    /// Line between two pixel-space points
    Line { from: Vec2, to: Vec2, color: Color },

    /// Filled disc centred on a pixel-space point
    Point { at: Vec2, radius: f32, color: Color },
}

/// RGBA pixel buffer with straight alpha
///
/// Every scene owns one canvas as its output surface. Drawing blends with
/// the "over" operator so translucent wireframes and particles stack the
/// way they would on a transparent WebGL context.
#[derive(Clone)]
pub struct Canvas {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new transparent canvas with dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; SurfaceSize::new(width, height).buffer_size()],
            width,
            height,
        }
    }

    /// Resize the canvas, clearing it. Same-size calls keep the buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }

        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(SurfaceSize::new(width, height).buffer_size(), 0);
    }

    /// Execute a batch of draw operations in order
    pub fn execute(&mut self, ops: &[DrawOp]) {
        for op in ops {
            self.execute_op(op);
        }
    }

    fn execute_op(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Clear(color) => self.clear(color),
            DrawOp::Line { from, to, color } => self.draw_line(from, to, color),
            DrawOp::Point { at, radius, color } => self.draw_point(at, radius, color),
        }
    }

    fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Blend a colour over the pixel at (x, y); out of bounds is ignored
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        let blended = blend_over(&self.pixels[idx..idx + 4], color);
        self.pixels[idx..idx + 4].copy_from_slice(&blended);
    }

    /// Bresenham line, clipped to the canvas first so far-away endpoints
    /// don't walk millions of off-screen pixels
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let Some((from, to)) = self.clip_line(from, to) else {
            return;
        };

        let (mut x, mut y) = (from.x.round() as i32, from.y.round() as i32);
        let (x2, y2) = (to.x.round() as i32, to.y.round() as i32);

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend_pixel(x, y, color);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Liang-Barsky clip against the canvas rectangle
    fn clip_line(&self, from: Vec2, to: Vec2) -> Option<(Vec2, Vec2)> {
        if !from.is_finite() || !to.is_finite() {
            return None;
        }

        let max = Vec2::new(self.width as f32 - 1.0, self.height as f32 - 1.0);
        if max.x < 0.0 || max.y < 0.0 {
            return None;
        }

        let d = to - from;
        let mut t0 = 0.0f32;
        let mut t1 = 1.0f32;

        let edges = [
            (-d.x, from.x),
            (d.x, max.x - from.x),
            (-d.y, from.y),
            (d.y, max.y - from.y),
        ];

        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }

            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }

        Some((from + d * t0, from + d * t1))
    }

    fn draw_point(&mut self, at: Vec2, radius: f32, color: Color) {
        if !at.is_finite() {
            return;
        }

        let radius = radius.max(0.5);
        let r = radius.ceil() as i32;
        let (cx, cy) = (at.x.round() as i32, at.y.round() as i32);
        let r_sq = radius * radius;

        for dy in -r..=r {
            for dx in -r..=r {
                if (dx * dx + dy * dy) as f32 <= r_sq {
                    self.blend_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Composite this canvas over `dst` with its top-left corner at (x, y)
    pub fn blit_onto(&self, dst: &mut Canvas, x: i32, y: i32) {
        for row in 0..self.height as i32 {
            let dst_y = y + row;
            if dst_y < 0 || dst_y >= dst.height as i32 {
                continue;
            }

            for col in 0..self.width as i32 {
                let idx = ((row as u32 * self.width + col as u32) * 4) as usize;
                let src = &self.pixels[idx..idx + 4];
                if src[3] == 0 {
                    continue;
                }

                let color = Color::rgba(
                    src[0] as f32 / 255.0,
                    src[1] as f32 / 255.0,
                    src[2] as f32 / 255.0,
                    src[3] as f32 / 255.0,
                );
                dst.blend_pixel(x + col, dst_y, color);
            }
        }
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(out)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height)
    }

    /// Number of pixels with non-zero alpha
    pub fn coverage(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| px[3] > 0).count()
    }
}

fn blend_over(dst: &[u8], src: Color) -> [u8; 4] {
    let sa = src.a.clamp(0.0, 1.0);
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }

    let channel = |s: f32, d: u8| (s * sa + (d as f32 / 255.0) * da * (1.0 - sa)) / out_a;
    Color::rgba(
        channel(src.r, dst[0]),
        channel(src.g, dst[1]),
        channel(src.b, dst[2]),
        out_a,
    )
    .to_rgba8()
}
