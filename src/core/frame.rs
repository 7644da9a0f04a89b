/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Wall-clock seconds at the start of the tick
    pub time: f32,
    /// Seconds since the previous tick of the same loop
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Running frame-rate average, reported once per interval
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: f32,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Count one frame; returns the new average when an interval completes
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
