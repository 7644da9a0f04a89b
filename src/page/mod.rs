//! Page state around the scenes: navigation, scroll effects, cards, the
//! contact form and its toast.

pub mod content;
pub mod dom;
pub mod form;
pub mod layout;
pub mod navigation;
pub mod reveal;
pub mod skills;
pub mod styles;
pub mod tilt;
pub mod toast;
pub mod tween;

use std::collections::BTreeMap;

use glam::Vec2;

use crate::core::SurfaceSize;

pub use dom::{ClassList, InlineStyle};
pub use form::{ContactForm, FieldName, Submission, SUCCESS_MESSAGE};
pub use layout::{PageLayout, Rect, SectionId};
pub use navigation::{Navbar, ScrollState};
pub use reveal::RevealObserver;
pub use skills::{SkillBars, SkillCard};
pub use styles::StyleSheet;
pub use tilt::{ProjectCard, Tilt};
pub use toast::{Toast, ToastKind, ToastStack};

/// Section backgrounds scroll at this fraction of the page speed
pub const PARALLAX_SPEED: f32 = 0.5;
/// Fade-out time of the loading cover
pub const LOAD_FADE: f32 = 0.5;

/// Classes and inline style of one top-level section
#[derive(Debug, Clone, Default)]
pub struct Section {
    pub classes: ClassList,
    pub style: InlineStyle,
}

/// The whole document: layout plus every interactive element's state
#[derive(Debug, Clone)]
pub struct Page {
    layout: PageLayout,
    pub body: ClassList,
    loaded_at: Option<f32>,
    pub navbar: Navbar,
    scroll: ScrollState,
    /// Section the running smooth scroll is heading to
    scroll_target: Option<SectionId>,
    sections: BTreeMap<SectionId, Section>,
    reveal: RevealObserver,
    pub skill_bars: SkillBars,
    skill_cards: Vec<SkillCard>,
    project_cards: Vec<ProjectCard>,
    pub form: ContactForm,
    pub toasts: ToastStack,
    pub styles: StyleSheet,
}

impl Page {
    pub fn new(layout: PageLayout) -> Self {
        let mut page = Self {
            layout,
            body: ClassList::new(),
            loaded_at: None,
            navbar: Navbar::new(),
            scroll: ScrollState::default(),
            scroll_target: None,
            sections: SectionId::ALL.into_iter().map(|id| (id, Section::default())).collect(),
            reveal: RevealObserver::new(),
            skill_bars: SkillBars::new(&content::SKILLS),
            skill_cards: vec![SkillCard::default(); content::SKILLS.len()],
            project_cards: vec![ProjectCard::default(); content::PROJECTS.len()],
            form: ContactForm::new(),
            toasts: ToastStack::new(),
            styles: StyleSheet::new(),
        };

        page.styles.inject("reveal", styles::REVEAL_STYLES);
        page.refresh(0.0);
        page
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn resize(&mut self, viewport: SurfaceSize, now: f32) {
        self.layout.resize(viewport);
        self.scroll.clamp_to(self.layout.max_scroll());
        if self.scroll.is_animating() {
            if let Some(top) = self.scroll_target.and_then(|id| self.layout.section_top(id)) {
                self.scroll.retarget(top);
            }
        }
        self.refresh(now);
    }

    /// Mark the page loaded and start fading the loading cover
    pub fn load(&mut self, now: f32) {
        if self.body.add("loaded") {
            self.loaded_at = Some(now);
            self.styles.inject("loading", styles::LOADING_STYLES);
            log::info!("page loaded");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.body.contains("loaded")
    }

    /// Opacity of the loading cover at `now`
    pub fn overlay_opacity(&self, now: f32) -> f32 {
        match self.loaded_at {
            None => 1.0,
            Some(at) => tween::Tween::new(1.0, 0.0, at, LOAD_FADE, tween::Easing::EaseInOut).value(now),
        }
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Wheel or touchpad scroll
    pub fn scroll_by(&mut self, delta: f32, now: f32) {
        self.scroll.scroll_by(delta, self.layout.max_scroll());
        self.refresh(now);
    }

    /// Smooth-scroll to an `#id` anchor; unknown targets are ignored
    pub fn scroll_to(&mut self, href: &str, now: f32) -> bool {
        let Some((id, target)) = SectionId::from_anchor(href)
            .and_then(|id| self.layout.section_top(id).map(|top| (id, top)))
        else {
            log::debug!("no scroll target for '{href}'");
            return false;
        };
        self.scroll_target = Some(id);
        self.scroll.animate_to(target, now);
        true
    }

    /// Nav link click: always closes the mobile menu
    pub fn click_nav_link(&mut self, href: &str, now: f32) -> bool {
        let scrolled = self.scroll_to(href, now);
        self.navbar.close_menu();
        scrolled
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.navbar.toggle_menu()
    }

    pub fn click_scroll_indicator(&mut self, now: f32) -> bool {
        self.scroll_to("#about", now)
    }

    /// Hero buttons only scroll for in-page anchors
    pub fn click_hero_button(&mut self, href: &str, now: f32) -> bool {
        href.starts_with('#') && self.scroll_to(href, now)
    }

    /// Per-frame update of animations that depend on time
    pub fn tick(&mut self, now: f32) {
        if self.scroll.tick(now, self.layout.max_scroll()) {
            self.refresh(now);
        }
        self.toasts.prune(now);
    }

    /// Re-run every scroll listener against the current offset
    fn refresh(&mut self, now: f32) {
        let offset = self.scroll.offset();
        self.navbar.on_scroll(offset);

        for id in self.reveal.observe(&self.layout, offset) {
            if let Some(section) = self.sections.get_mut(&id) {
                section.classes.add("animate-in");
            }
            if id == SectionId::Skills {
                self.skill_bars.start(now);
            }
        }

        let background = format!("center {}px", self.parallax_offset());
        for section in self.sections.values_mut() {
            section.style.set("background-position", background.clone());
        }
    }

    /// Vertical background offset of every section
    pub fn parallax_offset(&self) -> f32 {
        -(self.scroll.offset() * PARALLAX_SPEED)
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(&id)
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.section(id).is_some_and(|section| section.classes.contains("animate-in"))
    }

    /// Submit the contact form and raise its toast; returns the toast id
    pub fn submit_contact(&mut self, now: f32) -> u64 {
        self.form.submit();
        self.toasts.push(SUCCESS_MESSAGE, ToastKind::Success, now)
    }

    pub fn skill_cards(&self) -> &[SkillCard] {
        &self.skill_cards
    }

    pub fn skill_card_hover(&mut self, index: usize, hovered: bool) {
        let Some(card) = self.skill_cards.get_mut(index) else {
            return;
        };
        match (hovered, card.is_hovered()) {
            (true, false) => card.pointer_enter(),
            (false, true) => card.pointer_leave(),
            _ => {}
        }
    }

    pub fn project_cards(&self) -> &[ProjectCard] {
        &self.project_cards
    }

    /// Pointer over project card `index`, whose on-screen rect is `card`
    pub fn project_pointer_move(&mut self, index: usize, card: Rect, point: Vec2) {
        if let Some(project) = self.project_cards.get_mut(index) {
            project.pointer_move(card, point);
        }
    }

    pub fn project_pointer_leave(&mut self, index: usize) {
        if let Some(project) = self.project_cards.get_mut(index) {
            if project.tilt() != Tilt::REST {
                project.pointer_leave();
            }
        }
    }

    /// Cursor left the window: drop every card hover and tilt
    pub fn pointer_left(&mut self) {
        for index in 0..self.skill_cards.len() {
            self.skill_card_hover(index, false);
        }
        for index in 0..self.project_cards.len() {
            self.project_pointer_leave(index);
        }
    }

    /// Window point relative to the hero surface, when over it
    pub fn hero_pointer(&self, point: Vec2) -> Option<Vec2> {
        self.layout
            .surface_local(crate::core::SceneName::Hero, point, self.scroll.offset())
    }
}
