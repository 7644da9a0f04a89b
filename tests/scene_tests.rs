use glam::Vec3;
use portfolio3d::config::ScenesConfig;
use portfolio3d::core::{
    LoopState, ManualClock, RenderLoop, SceneController, SceneName, SceneRng, SurfaceHost, SurfaceSize,
};
use portfolio3d::scenes::contact::{RESET_THRESHOLD, SPAWN_HEIGHT};
use portfolio3d::scenes::palette::CYAN;
use portfolio3d::scenes::{setup_scenes, HeroScene, NodeEntity, NodeGraph, ParticleField, ShapeField};

/// Host that only provides the listed surfaces
struct MockHost {
    surfaces: Vec<(SceneName, SurfaceSize)>,
}

impl SurfaceHost for MockHost {
    fn surface_size(&self, name: SceneName) -> Option<SurfaceSize> {
        self.surfaces.iter().find(|(n, _)| *n == name).map(|(_, size)| *size)
    }
}

// ============================================================================
// Setup
// ============================================================================

#[test]
fn test_missing_surface_starts_no_loop() {
    let host = MockHost {
        surfaces: vec![(SceneName::About, SurfaceSize::new(200, 100))],
    };
    let mut rng = SceneRng::seeded(1);
    let registry = setup_scenes(&host, &ScenesConfig::default(), &mut rng);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.state(SceneName::About), Some(LoopState::Running));
    assert_eq!(registry.state(SceneName::Hero), None);
    assert_eq!(registry.state(SceneName::Contact), None);
}

#[test]
fn test_no_surfaces_at_all() {
    let host = MockHost { surfaces: vec![] };
    let mut rng = SceneRng::seeded(1);
    let mut registry = setup_scenes(&host, &ScenesConfig::default(), &mut rng);

    assert!(registry.is_empty());
    assert_eq!(registry.tick_all(&ManualClock::new(1.0)), 0);
}

#[test]
fn test_every_scene_ticks_once_per_frame() {
    let size = SurfaceSize::new(160, 120);
    let host = MockHost {
        surfaces: SceneName::ALL.iter().map(|name| (*name, size)).collect(),
    };
    let mut rng = SceneRng::seeded(3);
    let mut registry = setup_scenes(&host, &ScenesConfig::default(), &mut rng);
    let clock = ManualClock::new(0.0);

    for _ in 0..4 {
        clock.advance(1.0 / 60.0);
        assert_eq!(registry.tick_all(&clock), 3);
    }
    for name in SceneName::ALL {
        assert_eq!(registry.frames(name), Some(4));
        let drawn = registry.get(name).map(|scene| scene.viewport().draw_calls());
        assert_eq!(drawn, Some(4));
    }
}

// ============================================================================
// Shape Field
// ============================================================================

#[test]
fn test_seeded_hero_first_tick_matches_formulas() {
    let mut rng = SceneRng::seeded(2024);
    let field = ShapeField::build(12, &mut rng);
    let before = field.entities()[0].clone();

    let mut scene = HeroScene::new(field, SurfaceSize::new(320, 200));
    let mut driver = RenderLoop::new();
    driver.start();
    let frame = driver.tick(&mut scene, &ManualClock::new(1.0));
    assert_eq!(frame.map(|f| f.number), Some(0));

    let entity = &scene.field().entities()[0];
    let t = 1.0 + before.float_phase;
    let initial = before.initial_position();

    assert_eq!(scene.field().len(), 12);
    assert!((entity.position().y - (initial.y + t.sin() * 0.5)).abs() < 1e-5);
    assert!((entity.position().x - (initial.x + (t * 0.5).cos() * 0.3)).abs() < 1e-5);
    assert_eq!(entity.position().z, initial.z);
    assert!((entity.rotation() - (before.rotation() + before.rotation_rate)).length() < 1e-6);
}

#[test]
fn test_same_seed_same_field() {
    let a = ShapeField::build(12, &mut SceneRng::seeded(77));
    let b = ShapeField::build(12, &mut SceneRng::seeded(77));

    for (x, y) in a.entities().iter().zip(b.entities()) {
        assert_eq!(x.kind, y.kind);
        assert_eq!(x.initial_position(), y.initial_position());
        assert_eq!(x.rotation_rate, y.rotation_rate);
    }
}

#[test]
fn test_rotation_accumulates_without_wrapping() {
    let mut field = ShapeField::build(3, &mut SceneRng::seeded(9));
    let start: Vec<Vec3> = field.entities().iter().map(|e| e.rotation()).collect();

    for frame in 1..=600 {
        field.update(frame as f32 / 60.0);
    }

    for (entity, start) in field.entities().iter().zip(start) {
        let expected = start + entity.rotation_rate * 600.0;
        assert!((entity.rotation() - expected).length() < 5e-3);
    }
}

// ============================================================================
// Node Graph
// ============================================================================

#[test]
fn test_link_distance_is_strict() {
    let nodes = vec![
        NodeEntity::new(Vec3::new(0.0, 0.0, 0.0), 0.0, CYAN),
        NodeEntity::new(Vec3::new(3.0, 0.0, 0.0), 0.0, CYAN),
        NodeEntity::new(Vec3::new(0.0, 2.5, 0.0), 0.0, CYAN),
    ];
    let graph = NodeGraph::with_nodes(nodes, 3.0);

    assert!(!graph.has_edge(0, 1));
    assert!(graph.has_edge(0, 2));
    assert_eq!(graph.edges().len(), 1);
}

#[test]
fn test_edges_match_initial_distances() {
    let graph = NodeGraph::build(20, 3.0, &mut SceneRng::seeded(11));
    let nodes = graph.nodes();

    for a in 0..nodes.len() {
        for b in (a + 1)..nodes.len() {
            let close = nodes[a].initial_position().distance(nodes[b].initial_position()) < 3.0;
            assert_eq!(graph.has_edge(a, b), close, "pair ({a}, {b})");
        }
    }
}

#[test]
fn test_edge_count_and_buffer_stable_over_frames() {
    let mut graph = NodeGraph::build(20, 3.0, &mut SceneRng::seeded(12));
    let edges = graph.edges().len();
    let capacity = graph.edge_buffer().capacity();
    let ptr = graph.edge_buffer().vertices().as_ptr();

    for frame in 0..1000 {
        graph.update(frame as f32 / 60.0);
    }

    assert_eq!(graph.edges().len(), edges);
    assert_eq!(graph.edge_buffer().capacity(), capacity);
    assert_eq!(graph.edge_buffer().vertices().as_ptr(), ptr);
    assert_eq!(graph.edge_buffer().vertices().len(), edges * 2);
}

#[test]
fn test_edge_segments_follow_nodes() {
    let mut graph = NodeGraph::build(20, 3.0, &mut SceneRng::seeded(13));
    graph.update(2.0);

    for (i, edge) in graph.edges().iter().enumerate() {
        let segment = graph.edge_buffer().segment(i);
        assert_eq!(
            segment,
            Some((graph.nodes()[edge.a].position(), graph.nodes()[edge.b].position()))
        );
    }
}

// ============================================================================
// Particle Field
// ============================================================================

#[test]
fn test_particle_below_floor_respawns_at_top() {
    let mut field = ParticleField::from_buffers(
        vec![[0.0, RESET_THRESHOLD + 0.01, 0.0], [1.0, 0.0, 1.0]],
        vec![[1.0, 1.0, 1.0]; 2],
    );

    field.update();

    assert_eq!(field.positions()[0][1], SPAWN_HEIGHT);
    assert!((field.positions()[1][1] + 0.02).abs() < 1e-7);
    assert_eq!(field.positions()[0][0], 0.0);
}

#[test]
fn test_particle_at_floor_respawns_next_step() {
    let mut field = ParticleField::from_buffers(
        vec![[0.0, RESET_THRESHOLD, 0.0], [0.0, -24.9, 0.0]],
        vec![[1.0; 3]; 2],
    );
    field.update();

    assert_eq!(field.positions()[0][1], SPAWN_HEIGHT);
    assert!(field.positions()[1][1] > RESET_THRESHOLD);
}

#[test]
fn test_long_run_stays_in_band() {
    let mut field = ParticleField::build(1000, &mut SceneRng::seeded(14));
    for _ in 0..3000 {
        field.update();
    }
    for p in field.positions() {
        assert!(p[1] >= RESET_THRESHOLD && p[1] <= SPAWN_HEIGHT);
    }
}
