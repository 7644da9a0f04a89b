use glam::Vec2;

use super::dom::InlineStyle;
use super::layout::Rect;

/// Maximum tilt at the card's edge, in degrees
pub const MAX_TILT_DEGREES: f32 = 10.0;
pub const HOVER_LIFT: f32 = 10.0;

/// Perspective tilt of a project card following the pointer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub translate_z: f32,
}

impl Tilt {
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        translate_z: 0.0,
    };

    /// Tilt for a pointer at `point`, both in the same coordinate space as `card`
    pub fn from_pointer(card: Rect, point: Vec2) -> Self {
        let local = card.local(point);
        let cx = card.width / 2.0;
        let cy = card.height / 2.0;
        if cx <= 0.0 || cy <= 0.0 {
            return Self::REST;
        }

        Self {
            rotate_x: (local.y - cy) / cy * -MAX_TILT_DEGREES,
            rotate_y: (local.x - cx) / cx * MAX_TILT_DEGREES,
            translate_z: HOVER_LIFT,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
            css_number(self.rotate_x),
            css_number(self.rotate_y),
            css_number(self.translate_z)
        )
    }
}

/// Negative zero prints as `0`
fn css_number(value: f32) -> f32 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Project card state
#[derive(Debug, Clone, Default)]
pub struct ProjectCard {
    pub style: InlineStyle,
    tilt: Tilt,
}

impl ProjectCard {
    pub fn pointer_move(&mut self, card: Rect, point: Vec2) {
        self.apply(Tilt::from_pointer(card, point));
    }

    pub fn pointer_leave(&mut self) {
        self.apply(Tilt::REST);
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    fn apply(&mut self, tilt: Tilt) {
        self.tilt = tilt;
        self.style.set("transform", tilt.transform());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect::new(100.0, 200.0, 200.0, 100.0);

    #[test]
    fn test_corner_tilts_fully() {
        let tilt = Tilt::from_pointer(CARD, Vec2::new(100.0, 200.0));
        assert_eq!(tilt.rotate_x, 10.0);
        assert_eq!(tilt.rotate_y, -10.0);
        assert_eq!(tilt.translate_z, 10.0);
    }

    #[test]
    fn test_center_is_flat_and_prints_zero() {
        let tilt = Tilt::from_pointer(CARD, CARD.center());
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(10px)"
        );
    }

    #[test]
    fn test_quarter_offsets() {
        let tilt = Tilt::from_pointer(CARD, Vec2::new(250.0, 225.0));
        assert!((tilt.rotate_x - 5.0).abs() < 1e-6);
        assert!((tilt.rotate_y - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_leave_resets() {
        let mut card = ProjectCard::default();
        card.pointer_move(CARD, Vec2::new(290.0, 290.0));
        card.pointer_leave();

        assert_eq!(card.tilt(), Tilt::REST);
        assert_eq!(
            card.style.get("transform"),
            Some("perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(0px)")
        );
    }
}
