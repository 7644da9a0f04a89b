use std::f32::consts::TAU;

use glam::Vec3;

use super::common::{Material, Projector};
use super::palette::{ACCENTS, CYAN};
use crate::core::{Color, DrawOp, SceneController, SceneName, SceneRng, SurfaceSize, Transform, Viewport};

pub const DEFAULT_NODE_COUNT: usize = 20;
pub const DEFAULT_LINK_DISTANCE: f32 = 3.0;

const SPAWN_SPAN: Vec3 = Vec3::new(8.0, 6.0, 4.0);
const SWAY_X: f32 = 0.5;
const SWAY_Y: f32 = 0.3;
const SWAY_Y_FREQUENCY: f32 = 0.7;
const NODE_SPIN: f32 = 0.01;
const GRAPH_SPIN: f32 = 0.005;

const NODE_RADIUS: f32 = 0.1;
const NODE_OPACITY: f32 = 0.8;
const EDGE_OPACITY: f32 = 0.4;
const CAMERA_DISTANCE: f32 = 8.0;

/// A point in the about-section graph
#[derive(Debug, Clone)]
pub struct NodeEntity {
    initial_position: Vec3,
    pub phase: f32,
    pub transform: Transform,
    pub material: Material,
}

impl NodeEntity {
    pub fn new(initial_position: Vec3, phase: f32, tint: Color) -> Self {
        Self {
            initial_position,
            phase,
            transform: Transform::from_position(initial_position),
            material: Material::new(tint, NODE_OPACITY),
        }
    }

    fn spawn(rng: &mut SceneRng) -> Self {
        let tint = if rng.coin() { ACCENTS[0] } else { ACCENTS[1] };
        let initial_position = rng.centered_vec3(SPAWN_SPAN);
        let phase = rng.up_to(TAU);
        Self::new(initial_position, phase, tint)
    }

    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    fn step(&mut self, elapsed: f32) {
        let t = elapsed + self.phase;
        self.transform.position.x = self.initial_position.x + t.sin() * SWAY_X;
        self.transform.position.y = self.initial_position.y + (t * SWAY_Y_FREQUENCY).cos() * SWAY_Y;
        self.transform.rotate_by(Vec3::new(NODE_SPIN, NODE_SPIN, 0.0));
    }
}

/// Unordered pair of node indices, stored with `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

/// Line-list vertex buffer for the graph's edges
///
/// Sized once for the edge set and rewritten in place every frame, so a
/// long-running page never allocates for edge geometry after setup.
#[derive(Debug, Clone)]
pub struct EdgeBuffer {
    vertices: Vec<[f32; 3]>,
}

impl EdgeBuffer {
    fn for_edges(edges: &[Edge], nodes: &[NodeEntity]) -> Self {
        let mut buffer = Self {
            vertices: vec![[0.0; 3]; edges.len() * 2],
        };
        buffer.write(edges, nodes);
        buffer
    }

    /// Overwrite each edge's two vertices with its endpoints' positions
    fn write(&mut self, edges: &[Edge], nodes: &[NodeEntity]) {
        for (slot, edge) in self.vertices.chunks_exact_mut(2).zip(edges) {
            slot[0] = nodes[edge.a].position().to_array();
            slot[1] = nodes[edge.b].position().to_array();
        }
    }

    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    /// Segment endpoints of edge `i`
    pub fn segment(&self, i: usize) -> Option<(Vec3, Vec3)> {
        let a = self.vertices.get(i * 2)?;
        let b = self.vertices.get(i * 2 + 1)?;
        Some((Vec3::from_array(*a), Vec3::from_array(*b)))
    }
}

/// Nodes linked by proximity, swaying and spinning as one body
#[derive(Debug, Clone)]
pub struct NodeGraph {
    nodes: Vec<NodeEntity>,
    edges: Vec<Edge>,
    edge_buffer: EdgeBuffer,
    /// Rigid-body transform of the whole graph
    pub root: Transform,
}

impl NodeGraph {
    pub fn build(count: usize, link_distance: f32, rng: &mut SceneRng) -> Self {
        let nodes = (0..count).map(|_| NodeEntity::spawn(rng)).collect();
        Self::with_nodes(nodes, link_distance)
    }

    /// Link every pair whose initial positions are closer than
    /// `link_distance`. The edge set never changes afterwards.
    pub fn with_nodes(nodes: Vec<NodeEntity>, link_distance: f32) -> Self {
        let mut edges = Vec::new();
        for a in 0..nodes.len() {
            for b in (a + 1)..nodes.len() {
                let distance = nodes[a].initial_position.distance(nodes[b].initial_position);
                if distance < link_distance {
                    edges.push(Edge { a, b });
                }
            }
        }

        let edge_buffer = EdgeBuffer::for_edges(&edges, &nodes);
        Self {
            nodes,
            edges,
            edge_buffer,
            root: Transform::IDENTITY,
        }
    }

    pub fn update(&mut self, elapsed: f32) {
        for node in &mut self.nodes {
            node.step(elapsed);
        }
        self.edge_buffer.write(&self.edges, &self.nodes);
        self.root.rotate_by(Vec3::new(0.0, GRAPH_SPIN, 0.0));
    }

    pub fn nodes(&self) -> &[NodeEntity] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_buffer(&self) -> &EdgeBuffer {
        &self.edge_buffer
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        self.edges.contains(&Edge { a, b })
    }
}

/// About scene controller
pub struct AboutScene {
    graph: NodeGraph,
    edge_material: Material,
    viewport: Viewport,
    draw_list: Vec<DrawOp>,
}

impl AboutScene {
    pub fn new(graph: NodeGraph, surface: SurfaceSize) -> Self {
        let mut viewport = Viewport::new(surface);
        viewport.camera.position = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);
        viewport.camera.look_at(Vec3::ZERO);

        Self {
            graph,
            edge_material: Material::new(CYAN, EDGE_OPACITY),
            viewport,
            draw_list: Vec::new(),
        }
    }

    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }
}

impl SceneController for AboutScene {
    fn name(&self) -> SceneName {
        SceneName::About
    }

    fn update(&mut self, elapsed: f32) {
        self.graph.update(elapsed);
    }

    fn render(&mut self) {
        let mut ops = std::mem::take(&mut self.draw_list);
        ops.clear();
        ops.push(DrawOp::Clear(Color::TRANSPARENT));

        {
            let projector = Projector::new(&self.viewport.camera, self.viewport.surface_size());
            let model = self.graph.root.matrix();
            let edge_color = self.edge_material.color();

            let buffer = self.graph.edge_buffer();
            ops.extend((0..self.graph.edges().len()).filter_map(|i| {
                let (a, b) = buffer.segment(i)?;
                projector.segment(model.transform_point3(a), model.transform_point3(b), edge_color)
            }));

            ops.extend(self.graph.nodes().iter().filter_map(|node| {
                projector.sphere(model.transform_point3(node.position()), NODE_RADIUS, node.material.color())
            }));
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_respects_ranges() {
        let mut rng = SceneRng::seeded(11);
        let graph = NodeGraph::build(100, DEFAULT_LINK_DISTANCE, &mut rng);

        for node in graph.nodes() {
            let p = node.initial_position();
            assert!(p.x.abs() <= 4.0 && p.y.abs() <= 3.0 && p.z.abs() <= 2.0);
            assert!(ACCENTS.contains(&node.material.tint));
            assert!((0.0..TAU).contains(&node.phase));
        }
    }

    #[test]
    fn test_edges_are_ordered_pairs() {
        let mut rng = SceneRng::seeded(12);
        let graph = NodeGraph::build(DEFAULT_NODE_COUNT, DEFAULT_LINK_DISTANCE, &mut rng);
        for edge in graph.edges() {
            assert!(edge.a < edge.b);
            assert!(edge.b < graph.nodes().len());
        }
        assert_eq!(graph.edge_buffer().vertices().len(), graph.edges().len() * 2);
    }

    #[test]
    fn test_node_sway_formula() {
        let node = NodeEntity::new(Vec3::new(1.0, 2.0, 3.0), 0.25, CYAN);
        let mut graph = NodeGraph::with_nodes(vec![node], DEFAULT_LINK_DISTANCE);
        graph.update(2.0);

        let p = graph.nodes()[0].position();
        assert!((p.x - (1.0 + 2.25f32.sin() * 0.5)).abs() < 1e-6);
        assert!((p.y - (2.0 + (2.25f32 * 0.7).cos() * 0.3)).abs() < 1e-6);
        assert_eq!(p.z, 3.0);
        assert!((graph.nodes()[0].transform.rotation.x - 0.01).abs() < 1e-7);
        assert!((graph.root.rotation.y - 0.005).abs() < 1e-7);
    }

    #[test]
    fn test_edge_buffer_tracks_current_positions() {
        let nodes = vec![
            NodeEntity::new(Vec3::ZERO, 0.0, CYAN),
            NodeEntity::new(Vec3::new(1.0, 0.0, 0.0), 1.0, CYAN),
        ];
        let mut graph = NodeGraph::with_nodes(nodes, DEFAULT_LINK_DISTANCE);
        graph.update(3.0);

        let (a, b) = graph.edge_buffer().segment(0).expect("one edge");
        assert_eq!(a, graph.nodes()[0].position());
        assert_eq!(b, graph.nodes()[1].position());
        assert_eq!(graph.edge_buffer().as_bytes().len(), 2 * 3 * 4);
    }

    #[test]
    fn test_render_draws_edges_and_nodes() {
        let mut rng = SceneRng::seeded(4);
        let graph = NodeGraph::build(DEFAULT_NODE_COUNT, DEFAULT_LINK_DISTANCE, &mut rng);
        let mut scene = AboutScene::new(graph, SurfaceSize::new(160, 120));
        scene.update(0.0);
        scene.render();

        assert_eq!(scene.viewport().draw_calls(), 1);
        assert!(scene.viewport().canvas().coverage() > 0);
    }
}
