use super::content::Skill;
use super::dom::InlineStyle;
use super::tween::{Easing, Tween};

/// Bars wait this long after the section is revealed
pub const BAR_DELAY: f32 = 0.5;
pub const BAR_DURATION: f32 = 1.5;

const HOVER_TRANSFORM: &str = "translateY(-10px) rotateY(5deg)";
const HOVER_SHADOW: &str = "0 25px 50px rgba(6, 182, 212, 0.3)";
const REST_TRANSFORM: &str = "translateY(0) rotateY(0deg)";

/// Skill progress bars that grow once the skills section is revealed
#[derive(Debug, Clone)]
pub struct SkillBars {
    skills: Vec<Skill>,
    started_at: Option<f32>,
}

impl SkillBars {
    pub fn new(skills: &[Skill]) -> Self {
        Self {
            skills: skills.to_vec(),
            started_at: None,
        }
    }

    /// Start the grow animation; later calls keep the first start time
    pub fn start(&mut self, now: f32) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        log::debug!("animating {} skill bars", self.skills.len());
        true
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Width in percent of bar `index` at `now`
    pub fn width(&self, index: usize, now: f32) -> f32 {
        let (Some(skill), Some(started_at)) = (self.skills.get(index), self.started_at) else {
            return 0.0;
        };
        Tween::new(0.0, skill.level, started_at, BAR_DURATION, Easing::EaseOut)
            .with_delay(BAR_DELAY)
            .value(now)
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }
}

/// Hover lift applied to a skill card
#[derive(Debug, Clone, Default)]
pub struct SkillCard {
    pub style: InlineStyle,
    hovered: bool,
}

impl SkillCard {
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.style.set("transform", HOVER_TRANSFORM);
        self.style.set("box-shadow", HOVER_SHADOW);
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.style.set("transform", REST_TRANSFORM);
        self.style.set("box-shadow", "");
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::content::SKILLS;

    #[test]
    fn test_bars_hold_at_zero_until_started() {
        let bars = SkillBars::new(&SKILLS);
        assert_eq!(bars.width(0, 100.0), 0.0);
    }

    #[test]
    fn test_bar_timeline() {
        let mut bars = SkillBars::new(&SKILLS);
        assert!(bars.start(2.0));
        assert!(!bars.start(5.0));

        assert_eq!(bars.width(0, 2.5), 0.0);
        let mid = bars.width(0, 3.25);
        assert!(mid > 0.0 && mid < SKILLS[0].level);
        assert_eq!(bars.width(0, 4.0), SKILLS[0].level);
        assert_eq!(bars.width(99, 4.0), 0.0);
    }

    #[test]
    fn test_card_hover_styles() {
        let mut card = SkillCard::default();
        card.pointer_enter();
        assert_eq!(card.style.get("transform"), Some("translateY(-10px) rotateY(5deg)"));
        assert!(card.style.get("box-shadow").is_some());

        card.pointer_leave();
        assert_eq!(card.style.get("transform"), Some("translateY(0) rotateY(0deg)"));
        assert_eq!(card.style.get("box-shadow"), None);
        assert!(!card.is_hovered());
    }
}
