//! The page's three animated scenes and their setup

mod common;
pub mod about;
pub mod contact;
pub mod hero;
pub mod palette;

pub use about::{AboutScene, Edge, EdgeBuffer, NodeEntity, NodeGraph};
pub use common::Material;
pub use contact::{ContactScene, ParticleField};
pub use hero::{normalized_pointer, HeroScene, ShapeEntity, ShapeField};

use crate::config::ScenesConfig;
use crate::core::{SceneController, SceneName, SceneRegistry, SceneRng, SurfaceHost, SurfaceSize};

/// Build the controller for one named scene over a surface of `size`
pub fn build_scene(
    name: SceneName,
    size: SurfaceSize,
    config: &ScenesConfig,
    rng: &mut SceneRng,
) -> Box<dyn SceneController> {
    match name {
        SceneName::Hero => {
            let field = ShapeField::build(config.hero_shapes, rng);
            Box::new(HeroScene::new(field, size))
        }
        SceneName::About => {
            let graph = NodeGraph::build(config.about_nodes, config.link_distance, rng);
            Box::new(AboutScene::new(graph, size))
        }
        SceneName::Contact => {
            let field = ParticleField::build(config.contact_particles, rng);
            Box::new(ContactScene::new(field, size))
        }
    }
}

/// Build and start every scene whose surface the host provides
///
/// A missing surface is not an error: that scene is skipped and no loop is
/// started for it.
pub fn setup_scenes(host: &dyn SurfaceHost, config: &ScenesConfig, rng: &mut SceneRng) -> SceneRegistry {
    let mut registry = SceneRegistry::new();

    for name in SceneName::ALL {
        let Some(size) = host.surface_size(name) else {
            log::debug!("no '{}' surface on the page; skipping scene", name.surface_id());
            continue;
        };

        log::info!("setting up '{name}' scene at {}x{}", size.width, size.height);
        registry.register(build_scene(name, size, config, rng));
    }

    registry.start_all();
    registry
}
