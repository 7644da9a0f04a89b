use std::cell::Cell;
use std::time::Instant;

/// Source of wall-clock time in seconds
///
/// Scenes never read the system clock directly, so tests can drive them
/// with a [`ManualClock`].
pub trait TimeSource {
    /// Seconds elapsed since the source was created
    fn now(&self) -> f32;
}

/// Monotonic wall clock anchored at creation
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for Clock {
    fn now(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    time: Cell<f32>,
}

impl ManualClock {
    pub fn new(time: f32) -> Self {
        Self {
            time: Cell::new(time),
        }
    }

    pub fn set(&self, time: f32) {
        self.time.set(time);
    }

    pub fn advance(&self, delta: f32) {
        self.time.set(self.time.get() + delta);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> f32 {
        self.time.get()
    }
}
