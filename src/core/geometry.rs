use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Base solid of a hero shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Box,
    Sphere,
    Torus,
    Cone,
    Octahedron,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 5] = [
        GeometryKind::Box,
        GeometryKind::Sphere,
        GeometryKind::Torus,
        GeometryKind::Cone,
        GeometryKind::Octahedron,
    ];

    /// Wireframe at the size the hero uses for this kind
    pub fn wireframe(self) -> Wireframe {
        match self {
            GeometryKind::Box => Wireframe::cuboid(1.0),
            GeometryKind::Sphere => Wireframe::sphere(0.8, 16, 12),
            GeometryKind::Torus => Wireframe::torus(0.6, 0.2, 10, 32),
            GeometryKind::Cone => Wireframe::cone(0.6, 1.2, 16),
            GeometryKind::Octahedron => Wireframe::octahedron(0.8),
        }
    }
}

/// Line-list mesh in object space
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
}

impl Wireframe {
    pub fn cuboid(size: f32) -> Self {
        let h = size * 0.5;
        let vertices = (0..8)
            .map(|i| {
                Vec3::new(
                    if i & 1 == 0 { -h } else { h },
                    if i & 2 == 0 { -h } else { h },
                    if i & 4 == 0 { -h } else { h },
                )
            })
            .collect();

        // Corners differing in exactly one bit share an edge
        let edges = (0u32..8)
            .flat_map(|a| [1u32, 2, 4].into_iter().map(move |bit| [a, a ^ bit]))
            .filter(|[a, b]| a < b)
            .collect();

        Self { vertices, edges }
    }

    pub fn octahedron(radius: f32) -> Self {
        let vertices = vec![
            Vec3::X * radius,
            Vec3::NEG_X * radius,
            Vec3::Y * radius,
            Vec3::NEG_Y * radius,
            Vec3::Z * radius,
            Vec3::NEG_Z * radius,
        ];

        // Every vertex connects to all but its opposite
        let mut edges = Vec::with_capacity(12);
        for a in 0u32..6 {
            for b in (a + 1)..6 {
                if b != (a ^ 1) {
                    edges.push([a, b]);
                }
            }
        }

        Self { vertices, edges }
    }

    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self::parametric(height_segments + 1, width_segments, false, true, |row, col| {
            let phi = row as f32 / height_segments as f32 * PI;
            let theta = col as f32 / width_segments as f32 * TAU;
            Vec3::new(
                -radius * theta.cos() * phi.sin(),
                radius * phi.cos(),
                radius * theta.sin() * phi.sin(),
            )
        })
    }

    pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        Self::parametric(radial_segments, tubular_segments, true, true, |row, col| {
            let v = row as f32 / radial_segments as f32 * TAU;
            let u = col as f32 / tubular_segments as f32 * TAU;
            Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            )
        })
    }

    pub fn cone(radius: f32, height: f32, radial_segments: u32) -> Self {
        let half = height * 0.5;
        let mut vertices = vec![Vec3::new(0.0, half, 0.0)];
        let mut edges = Vec::with_capacity(radial_segments as usize * 2);

        for i in 0..radial_segments {
            let theta = i as f32 / radial_segments as f32 * TAU;
            vertices.push(Vec3::new(radius * theta.sin(), -half, radius * theta.cos()));

            let current = i + 1;
            let next = (i + 1) % radial_segments + 1;
            edges.push([0, current]);
            edges.push([current, next]);
        }

        Self { vertices, edges }
    }

    /// Grid of `rows` x `cols` vertices with edges along both directions
    fn parametric(
        rows: u32,
        cols: u32,
        wrap_rows: bool,
        wrap_cols: bool,
        point: impl Fn(u32, u32) -> Vec3,
    ) -> Self {
        let vertices = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| point(row, col))
            .collect();

        let index = |row: u32, col: u32| row * cols + col;
        let mut edges = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                if col + 1 < cols || wrap_cols {
                    edges.push([index(row, col), index(row, (col + 1) % cols)]);
                }
                if row + 1 < rows || wrap_rows {
                    edges.push([index(row, col), index((row + 1) % rows, col)]);
                }
            }
        }

        Self { vertices, edges }
    }

    /// Iterate edges as object-space segment endpoints
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges
            .iter()
            .map(|[a, b]| (self.vertices[*a as usize], self.vertices[*b as usize]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges_in_range(w: &Wireframe) -> bool {
        let n = w.vertices.len() as u32;
        w.edges.iter().all(|[a, b]| *a < n && *b < n && a != b)
    }

    #[test]
    fn test_cuboid_topology() {
        let w = Wireframe::cuboid(1.0);
        assert_eq!(w.vertices.len(), 8);
        assert_eq!(w.edges.len(), 12);
        assert!(edges_in_range(&w));
        for (a, b) in w.segments() {
            assert!(((a - b).length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_octahedron_topology() {
        let w = Wireframe::octahedron(0.8);
        assert_eq!(w.vertices.len(), 6);
        assert_eq!(w.edges.len(), 12);
        assert!(edges_in_range(&w));
    }

    #[test]
    fn test_cone_topology() {
        let w = Wireframe::cone(0.6, 1.2, 16);
        assert_eq!(w.vertices.len(), 17);
        assert_eq!(w.edges.len(), 32);
        assert!(edges_in_range(&w));
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let w = Wireframe::sphere(0.8, 16, 12);
        assert!(edges_in_range(&w));
        for v in &w.vertices {
            assert!((v.length() - 0.8).abs() < 1e-5);
        }
    }

    #[test]
    fn test_torus_is_closed() {
        let w = Wireframe::torus(0.6, 0.2, 10, 32);
        assert_eq!(w.vertices.len(), 320);
        assert_eq!(w.edges.len(), 640);
        assert!(edges_in_range(&w));
    }

    #[test]
    fn test_every_kind_builds() {
        for kind in GeometryKind::ALL {
            assert!(!kind.wireframe().edges.is_empty());
        }
    }
}
