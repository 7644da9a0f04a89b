use glam::Vec2;

use crate::config::PortfolioConfig;
use crate::core::{
    resize_scenes, Canvas, Compositor, Layer, SceneName, SceneRegistry, SceneRng, SurfaceSize, TimeSource,
};
use crate::page::{Page, PageLayout};
use crate::scenes::{self, normalized_pointer, palette::BACKGROUND};

/// The running page: document state, the scenes behind it and the frame
/// they are composed into
pub struct Portfolio {
    page: Page,
    registry: SceneRegistry,
    compositor: Compositor,
}

impl Portfolio {
    /// Lay the page out at `viewport` and start a scene for every surface
    /// not listed in `without`
    pub fn new(config: &PortfolioConfig, viewport: SurfaceSize, without: &[SceneName]) -> Self {
        let surfaces = SceneName::ALL.into_iter().filter(|name| !without.contains(name));
        let layout = PageLayout::new(viewport, surfaces);

        let mut rng = match config.seed {
            Some(seed) => {
                log::info!("placing scenes with seed {seed}");
                SceneRng::seeded(seed)
            }
            None => SceneRng::from_entropy(),
        };
        let registry = scenes::setup_scenes(&layout, &config.scenes, &mut rng);
        log::info!("{} of {} scenes running", registry.len(), SceneName::ALL.len());

        Self {
            page: Page::new(layout),
            registry,
            compositor: Compositor::new(viewport, BACKGROUND[0]),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// Advance page animations and every running scene by one frame
    pub fn tick(&mut self, clock: &dyn TimeSource) -> usize {
        self.page.tick(clock.now());
        self.registry.tick_all(clock)
    }

    /// Blit each scene canvas at its on-screen position
    pub fn compose(&mut self) -> &Canvas {
        let layout = self.page.layout();
        let scroll = self.page.scroll_offset();

        let layers = self
            .registry
            .controllers()
            .filter_map(|controller| {
                let rect = layout.surface_on_screen(controller.name(), scroll)?;
                Some(Layer::new(
                    controller.viewport().canvas(),
                    (rect.x.round() as i32, rect.y.round() as i32),
                ))
            })
            .collect();

        self.compositor.compose(layers)
    }

    pub fn frame(&self) -> &Canvas {
        self.compositor.frame()
    }

    /// Last composed frame alongside the page, for drawing the overlay on it
    pub fn frame_and_page(&mut self) -> (&Canvas, &mut Page) {
        (self.compositor.frame(), &mut self.page)
    }

    /// Reflow the page and resize every scene whose surface exists
    pub fn resize(&mut self, viewport: SurfaceSize, now: f32) -> usize {
        if viewport.is_empty() {
            log::debug!("ignoring resize to an empty viewport");
            return 0;
        }
        self.page.resize(viewport, now);
        self.compositor.resize(viewport);
        resize_scenes(&mut self.registry, self.page.layout())
    }

    /// Forward a window-space pointer to the hero camera when over its surface
    pub fn pointer_moved(&mut self, point: Vec2) -> bool {
        let Some(local) = self.page.hero_pointer(point) else {
            return false;
        };
        let surface = self.page.layout().viewport();
        match self.registry.get_mut(SceneName::Hero) {
            Some(hero) => {
                hero.pointer_moved(normalized_pointer(local, surface));
                true
            }
            None => false,
        }
    }

    /// Cursor left the window; card hover and tilt reset
    pub fn pointer_left(&mut self) {
        self.page.pointer_left();
    }

    pub fn scroll_by(&mut self, delta: f32, now: f32) {
        self.page.scroll_by(delta, now);
    }
}
