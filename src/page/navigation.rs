use super::dom::ClassList;
use super::tween::{Easing, Tween};

/// Navbar turns solid once the page is scrolled past this offset
pub const SCROLLED_THRESHOLD: f32 = 50.0;
pub const SMOOTH_SCROLL_DURATION: f32 = 0.6;

/// Fixed navigation bar with a collapsible mobile menu
#[derive(Debug, Clone, Default)]
pub struct Navbar {
    pub classes: ClassList,
    pub menu: ClassList,
    pub toggle: ClassList,
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: f32) {
        self.classes.set("scrolled", offset > SCROLLED_THRESHOLD);
    }

    pub fn is_scrolled(&self) -> bool {
        self.classes.contains("scrolled")
    }

    /// Flip the mobile menu; returns whether it is now open
    pub fn toggle_menu(&mut self) -> bool {
        self.toggle.toggle("active");
        self.menu.toggle("active")
    }

    pub fn close_menu(&mut self) {
        self.menu.remove("active");
        self.toggle.remove("active");
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.contains("active")
    }
}

/// Page scroll offset with optional smooth-scroll animation
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: f32,
    animation: Option<Tween>,
}

impl ScrollState {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Target of the running animation, if any
    pub fn target(&self) -> Option<f32> {
        self.animation.map(|tween| tween.end)
    }

    /// Immediate scroll by `delta`; cancels any animation
    pub fn scroll_by(&mut self, delta: f32, max: f32) {
        self.animation = None;
        self.offset = (self.offset + delta).clamp(0.0, max.max(0.0));
    }

    pub fn clamp_to(&mut self, max: f32) {
        self.offset = self.offset.clamp(0.0, max.max(0.0));
    }

    /// Start an eased scroll from the current offset to `target`
    pub fn animate_to(&mut self, target: f32, now: f32) {
        self.animation = Some(Tween::new(
            self.offset,
            target,
            now,
            SMOOTH_SCROLL_DURATION,
            Easing::EaseInOut,
        ));
    }

    /// Point a running animation at a new target, keeping its timeline
    pub fn retarget(&mut self, target: f32) {
        if let Some(tween) = &mut self.animation {
            tween.end = target;
        }
    }

    /// Advance the animation within `[0, max]`; true when the offset changed
    pub fn tick(&mut self, now: f32, max: f32) -> bool {
        let Some(tween) = self.animation else {
            return false;
        };

        let previous = self.offset;
        self.offset = tween.value(now).clamp(0.0, max.max(0.0));
        if tween.finished(now) {
            self.animation = None;
        }
        self.offset != previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_class_threshold() {
        let mut navbar = Navbar::new();
        navbar.on_scroll(50.0);
        assert!(!navbar.is_scrolled());
        navbar.on_scroll(50.5);
        assert!(navbar.is_scrolled());
        navbar.on_scroll(10.0);
        assert!(!navbar.is_scrolled());
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut navbar = Navbar::new();
        assert!(navbar.toggle_menu());
        assert!(navbar.toggle.contains("active"));
        assert!(!navbar.toggle_menu());

        navbar.toggle_menu();
        navbar.close_menu();
        assert!(!navbar.is_menu_open());
        assert!(!navbar.toggle.contains("active"));
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut scroll = ScrollState::default();
        scroll.animate_to(800.0, 1.0);

        assert!(scroll.tick(1.3, 1000.0));
        assert!(scroll.offset() > 0.0 && scroll.offset() < 800.0);
        assert!(scroll.tick(2.0, 1000.0));
        assert_eq!(scroll.offset(), 800.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_animation_stays_within_max() {
        let mut scroll = ScrollState::default();
        scroll.animate_to(800.0, 0.0);
        scroll.tick(0.5, 600.0);
        assert!(scroll.offset() <= 600.0);
        scroll.tick(1.0, 600.0);
        assert_eq!(scroll.offset(), 600.0);
    }

    #[test]
    fn test_retarget_keeps_timeline() {
        let mut scroll = ScrollState::default();
        scroll.animate_to(800.0, 0.0);
        scroll.retarget(400.0);
        assert_eq!(scroll.target(), Some(400.0));

        scroll.tick(0.6, 1000.0);
        assert_eq!(scroll.offset(), 400.0);
        assert!(!scroll.is_animating());

        scroll.retarget(900.0);
        assert_eq!(scroll.target(), None);
    }

    #[test]
    fn test_wheel_cancels_animation_and_clamps() {
        let mut scroll = ScrollState::default();
        scroll.animate_to(800.0, 0.0);
        scroll.scroll_by(-100.0, 1000.0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset(), 0.0);

        scroll.scroll_by(5000.0, 1000.0);
        assert_eq!(scroll.offset(), 1000.0);
    }
}
