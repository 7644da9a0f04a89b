use std::collections::BTreeMap;
use std::fmt;

use super::clock::TimeSource;
use super::scheduler::{LoopState, RenderLoop, SceneController};
use super::surface::SurfaceSize;

/// Fixed names of the page's animated surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SceneName {
    Hero,
    About,
    Contact,
}

impl SceneName {
    pub const ALL: [SceneName; 3] = [SceneName::Hero, SceneName::About, SceneName::Contact];

    /// Element id of the surface in the host document
    pub fn surface_id(self) -> &'static str {
        match self {
            SceneName::Hero => "hero-canvas",
            SceneName::About => "about-canvas",
            SceneName::Contact => "contact-canvas",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SceneName::Hero => "hero",
            SceneName::About => "about",
            SceneName::Contact => "contact",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == name)
    }
}

impl fmt::Display for SceneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host document lookup for named output surfaces
pub trait SurfaceHost {
    /// Current displayed size of the surface, `None` when it doesn't exist
    fn surface_size(&self, name: SceneName) -> Option<SurfaceSize>;
}

struct SceneEntry {
    controller: Box<dyn SceneController>,
    driver: RenderLoop,
}

/// Add-only map from scene name to its controller and loop driver
#[derive(Default)]
pub struct SceneRegistry {
    entries: BTreeMap<SceneName, SceneEntry>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scene; a name that is already taken is left untouched
    pub fn register(&mut self, controller: Box<dyn SceneController>) -> bool {
        let name = controller.name();
        if self.entries.contains_key(&name) {
            log::warn!("scene '{name}' is already registered; ignoring");
            return false;
        }

        self.entries.insert(
            name,
            SceneEntry {
                controller,
                driver: RenderLoop::new(),
            },
        );
        true
    }

    /// Start every registered loop that isn't running yet
    pub fn start_all(&mut self) {
        for (name, entry) in &mut self.entries {
            if !entry.driver.is_running() {
                log::debug!("starting render loop for '{name}'");
                entry.driver.start();
            }
        }
    }

    /// Tick every running loop once; returns how many ticked
    pub fn tick_all(&mut self, clock: &dyn TimeSource) -> usize {
        self.entries
            .values_mut()
            .filter_map(|entry| entry.driver.tick(entry.controller.as_mut(), clock))
            .count()
    }

    pub fn get(&self, name: SceneName) -> Option<&dyn SceneController> {
        self.entries.get(&name).map(|e| e.controller.as_ref())
    }

    pub fn get_mut(&mut self, name: SceneName) -> Option<&mut (dyn SceneController + 'static)> {
        self.entries.get_mut(&name).map(|e| e.controller.as_mut())
    }

    pub fn state(&self, name: SceneName) -> Option<LoopState> {
        self.entries.get(&name).map(|e| e.driver.state())
    }

    pub fn frames(&self, name: SceneName) -> Option<u64> {
        self.entries.get(&name).map(|e| e.driver.frames())
    }

    pub fn contains(&self, name: SceneName) -> bool {
        self.entries.contains_key(&name)
    }

    pub fn names(&self) -> impl Iterator<Item = SceneName> + '_ {
        self.entries.keys().copied()
    }

    pub fn controllers(&self) -> impl Iterator<Item = &dyn SceneController> + '_ {
        self.entries.values().map(|e| e.controller.as_ref())
    }

    pub fn controllers_mut(&mut self) -> impl Iterator<Item = &mut (dyn SceneController + 'static)> + '_ {
        self.entries.values_mut().map(|e| e.controller.as_mut())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
