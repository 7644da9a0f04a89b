use portfolio3d::config::ScenesConfig;
use portfolio3d::core::{resize_scenes, SceneName, SceneRegistry, SceneRng, SurfaceHost, SurfaceSize};
use portfolio3d::page::PageLayout;
use portfolio3d::scenes::{build_scene, setup_scenes};

struct MockHost {
    surfaces: Vec<(SceneName, SurfaceSize)>,
}

impl SurfaceHost for MockHost {
    fn surface_size(&self, name: SceneName) -> Option<SurfaceSize> {
        self.surfaces.iter().find(|(n, _)| *n == name).map(|(_, size)| *size)
    }
}

fn all_scenes(size: SurfaceSize) -> SceneRegistry {
    let layout = PageLayout::with_all_surfaces(size);
    let mut config = ScenesConfig::default();
    config.contact_particles = 100;
    setup_scenes(&layout, &config, &mut SceneRng::seeded(4))
}

#[test]
fn test_window_resize_reaches_every_scene() {
    let mut registry = all_scenes(SurfaceSize::new(800, 600));
    let layout = PageLayout::with_all_surfaces(SurfaceSize::new(1920, 1080));

    assert_eq!(resize_scenes(&mut registry, &layout), 3);

    for scene in registry.controllers() {
        let viewport = scene.viewport();
        assert!((viewport.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        assert_eq!(viewport.surface_size(), SurfaceSize::new(1920, 1080));
        assert_eq!(viewport.canvas().size(), SurfaceSize::new(1920, 1080));
    }
}

#[test]
fn test_resizing_one_surface_leaves_others() {
    let mut registry = all_scenes(SurfaceSize::new(400, 300));
    let host = MockHost {
        surfaces: vec![
            (SceneName::Hero, SurfaceSize::new(400, 300)),
            (SceneName::About, SurfaceSize::new(200, 400)),
            (SceneName::Contact, SurfaceSize::new(400, 300)),
        ],
    };

    resize_scenes(&mut registry, &host);

    let size_of = |name| registry.get(name).map(|scene| scene.viewport().surface_size());
    assert_eq!(size_of(SceneName::About), Some(SurfaceSize::new(200, 400)));
    assert_eq!(size_of(SceneName::Hero), Some(SurfaceSize::new(400, 300)));
    assert_eq!(size_of(SceneName::Contact), Some(SurfaceSize::new(400, 300)));

    let aspect = registry.get(SceneName::About).map(|scene| scene.viewport().camera.aspect);
    assert_eq!(aspect, Some(0.5));
}

#[test]
fn test_vanished_surface_is_skipped() {
    let mut registry = all_scenes(SurfaceSize::new(400, 300));
    let host = MockHost {
        surfaces: vec![(SceneName::Contact, SurfaceSize::new(640, 480))],
    };

    assert_eq!(resize_scenes(&mut registry, &host), 1);
    let hero = registry.get(SceneName::Hero).map(|scene| scene.viewport().surface_size());
    assert_eq!(hero, Some(SurfaceSize::new(400, 300)));
}

#[test]
fn test_resize_with_no_scenes_is_a_no_op() {
    let mut registry = SceneRegistry::new();
    let layout = PageLayout::with_all_surfaces(SurfaceSize::new(1024, 768));

    assert_eq!(resize_scenes(&mut registry, &layout), 0);
    assert_eq!(resize_scenes(&mut registry, &layout), 0);
    assert!(registry.is_empty());
}

#[test]
fn test_resize_twice_is_idempotent() {
    let mut registry = all_scenes(SurfaceSize::new(400, 300));
    let layout = PageLayout::with_all_surfaces(SurfaceSize::new(960, 540));

    assert_eq!(resize_scenes(&mut registry, &layout), 3);
    assert_eq!(resize_scenes(&mut registry, &layout), 3);
    for scene in registry.controllers() {
        assert_eq!(scene.viewport().surface_size(), SurfaceSize::new(960, 540));
        assert!((scene.viewport().camera.aspect - 960.0 / 540.0).abs() < 1e-6);
    }
}

#[test]
fn test_build_scene_uses_surface_aspect() {
    let scene = build_scene(
        SceneName::About,
        SurfaceSize::new(300, 150),
        &ScenesConfig::default(),
        &mut SceneRng::seeded(1),
    );
    assert_eq!(scene.name(), SceneName::About);
    assert_eq!(scene.viewport().camera.aspect, 2.0);
}
