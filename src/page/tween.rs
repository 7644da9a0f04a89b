/// Timing curves for page transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress in [0, 1] onto the curve
    pub fn apply(self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        match self {
            Easing::Linear => x,
            Easing::EaseOut => 1.0 - (1.0 - x).powi(3),
            Easing::EaseInOut => {
                if x < 0.5 {
                    4.0 * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A value moving from `start` to `end` on wall-clock time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start: f32,
    pub end: f32,
    pub started_at: f32,
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(start: f32, end: f32, started_at: f32, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            started_at,
            delay: 0.0,
            duration,
            easing,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Linear progress in [0, 1] at `now`
    pub fn progress(&self, now: f32) -> f32 {
        let t = now - self.started_at - self.delay;
        if self.duration <= 0.0 {
            return if t >= 0.0 { 1.0 } else { 0.0 };
        }
        (t / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self, now: f32) -> f32 {
        self.start + (self.end - self.start) * self.easing.apply(self.progress(now))
    }

    pub fn finished(&self, now: f32) -> bool {
        self.progress(now) >= 1.0
    }
}
