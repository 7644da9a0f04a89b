use glam::Vec2;

use super::clock::TimeSource;
use super::frame::FrameInfo;
use super::registry::SceneName;
use super::viewport::Viewport;

/// One animated scene: owns its entities and its viewport
///
/// The render loop calls `update` then `render` once per host frame.
pub trait SceneController {
    fn name(&self) -> SceneName;

    /// Advance the simulation to wall-clock time `elapsed` (seconds)
    fn update(&mut self, elapsed: f32);

    /// Draw the current state into the viewport; exactly one draw call
    fn render(&mut self);

    fn viewport(&self) -> &Viewport;

    fn viewport_mut(&mut self) -> &mut Viewport;

    /// Pointer position over this scene's surface, normalised to [-1, 1]
    /// with +y up. Scenes that don't react to the pointer ignore it.
    fn pointer_moved(&mut self, _pointer: Vec2) {}
}

/// Lifecycle of a scene loop; once running it never stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    Running,
}

/// Drives one scene controller per host frame
///
/// Cooperative: the host calls [`RenderLoop::tick`] once per display
/// refresh and gets control back after one update and one draw.
#[derive(Debug, Clone)]
pub struct RenderLoop {
    state: LoopState,
    frames: u64,
    last_time: Option<f32>,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Uninitialized,
            frames: 0,
            last_time: None,
        }
    }

    pub fn start(&mut self) {
        self.state = LoopState::Running;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one update and one draw; `None` if the loop was never started
    pub fn tick(&mut self, controller: &mut dyn SceneController, clock: &dyn TimeSource) -> Option<FrameInfo> {
        if !self.is_running() {
            return None;
        }

        let time = clock.now();
        let delta = self.last_time.map_or(0.0, |last| time - last);
        let info = FrameInfo::new(self.frames, time, delta);

        controller.update(time);
        controller.render();

        self.frames += 1;
        self.last_time = Some(time);
        Some(info)
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::surface::SurfaceSize;

    struct MockScene {
        viewport: Viewport,
        updates: Vec<f32>,
    }

    impl MockScene {
        fn new() -> Self {
            Self {
                viewport: Viewport::new(SurfaceSize::new(8, 8)),
                updates: Vec::new(),
            }
        }
    }

    impl SceneController for MockScene {
        fn name(&self) -> SceneName {
            SceneName::Hero
        }

        fn update(&mut self, elapsed: f32) {
            self.updates.push(elapsed);
        }

        fn render(&mut self) {
            self.viewport.draw(&[]);
        }

        fn viewport(&self) -> &Viewport {
            &self.viewport
        }

        fn viewport_mut(&mut self) -> &mut Viewport {
            &mut self.viewport
        }
    }

    #[test]
    fn test_unstarted_loop_does_nothing() {
        let mut scene = MockScene::new();
        let mut driver = RenderLoop::new();
        let clock = ManualClock::new(1.0);

        assert_eq!(driver.state(), LoopState::Uninitialized);
        assert!(driver.tick(&mut scene, &clock).is_none());
        assert!(scene.updates.is_empty());
        assert_eq!(scene.viewport.draw_calls(), 0);
    }

    #[test]
    fn test_tick_updates_then_draws_once() {
        let mut scene = MockScene::new();
        let mut driver = RenderLoop::new();
        let clock = ManualClock::new(2.0);
        driver.start();

        let first = driver.tick(&mut scene, &clock).expect("running");
        clock.advance(0.5);
        let second = driver.tick(&mut scene, &clock).expect("running");

        assert_eq!(scene.updates, vec![2.0, 2.5]);
        assert_eq!(scene.viewport.draw_calls(), 2);
        assert_eq!(first.number, 0);
        assert_eq!(first.delta, 0.0);
        assert_eq!(second.number, 1);
        assert!((second.delta - 0.5).abs() < 1e-6);
        assert_eq!(driver.frames(), 2);
        assert_eq!(driver.state(), LoopState::Running);
    }
}
