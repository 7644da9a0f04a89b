use super::registry::{SceneRegistry, SurfaceHost};

/// Fans a window resize out to every registered scene
///
/// Each scene whose surface still exists gets its camera aspect and output
/// size matched to the surface's displayed size. Scenes without a surface
/// are skipped. Returns the number of scenes resized.
pub fn resize_scenes(registry: &mut SceneRegistry, host: &dyn SurfaceHost) -> usize {
    let mut resized = 0;

    for controller in registry.controllers_mut() {
        let name = controller.name();
        let Some(size) = host.surface_size(name) else {
            log::debug!("resize: no surface for '{name}', skipping");
            continue;
        };

        log::debug!("resize: '{name}' -> {}x{}", size.width, size.height);
        controller.viewport_mut().resize(size);
        resized += 1;
    }

    resized
}
