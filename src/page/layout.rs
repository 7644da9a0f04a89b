use std::collections::BTreeSet;

use glam::Vec2;

use crate::core::{SceneName, SurfaceHost, SurfaceSize};

/// Sections never shrink below this height
pub const MIN_SECTION_HEIGHT: f32 = 640.0;

/// Axis-aligned rectangle in page pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.x + self.width && point.y >= self.y && point.y < self.bottom()
    }

    /// `point` relative to the top-left corner
    pub fn local(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.x, point.y - self.y)
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Height of the vertical overlap with the band `[top, bottom)`
    pub fn vertical_overlap(&self, top: f32, bottom: f32) -> f32 {
        (self.bottom().min(bottom) - self.y.max(top)).max(0.0)
    }
}

/// Top-level page sections, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Element id, the target of `#id` anchors
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Resolve an href-style anchor such as `#skills`
    pub fn from_anchor(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Scene drawn as this section's background, if any
    pub fn scene(self) -> Option<SceneName> {
        match self {
            SectionId::Hero => Some(SceneName::Hero),
            SectionId::About => Some(SceneName::About),
            SectionId::Contact => Some(SceneName::Contact),
            SectionId::Skills | SectionId::Projects => None,
        }
    }
}

/// Vertical stack of sections over a window-sized viewport
///
/// Each scene surface covers the top of its section at the full viewport
/// size, the way the page sizes every canvas to the window.
#[derive(Debug, Clone)]
pub struct PageLayout {
    viewport: SurfaceSize,
    sections: Vec<(SectionId, Rect)>,
    surfaces: BTreeSet<SceneName>,
}

impl PageLayout {
    /// Layout whose document provides the given scene surfaces
    pub fn new(viewport: SurfaceSize, surfaces: impl IntoIterator<Item = SceneName>) -> Self {
        let mut layout = Self {
            viewport,
            sections: Vec::with_capacity(SectionId::ALL.len()),
            surfaces: surfaces.into_iter().collect(),
        };
        layout.reflow();
        layout
    }

    pub fn with_all_surfaces(viewport: SurfaceSize) -> Self {
        Self::new(viewport, SceneName::ALL)
    }

    pub fn resize(&mut self, viewport: SurfaceSize) {
        self.viewport = viewport;
        self.reflow();
    }

    fn reflow(&mut self) {
        let width = self.viewport.width as f32;
        let height = (self.viewport.height as f32).max(MIN_SECTION_HEIGHT);

        self.sections.clear();
        let mut top = 0.0;
        for id in SectionId::ALL {
            self.sections.push((id, Rect::new(0.0, top, width, height)));
            top += height;
        }
    }

    pub fn viewport(&self) -> SurfaceSize {
        self.viewport
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionId, Rect)> + '_ {
        self.sections.iter().copied()
    }

    /// Section rectangle in document coordinates
    pub fn section(&self, id: SectionId) -> Option<Rect> {
        self.sections.iter().find(|(s, _)| *s == id).map(|(_, rect)| *rect)
    }

    /// Scroll offset that brings an anchor's section to the top
    pub fn anchor_top(&self, href: &str) -> Option<f32> {
        SectionId::from_anchor(href).and_then(|id| self.section_top(id))
    }

    /// Scroll offset that brings a section to the top, limited by the page end
    pub fn section_top(&self, id: SectionId) -> Option<f32> {
        self.section(id).map(|rect| rect.y.min(self.max_scroll()))
    }

    pub fn document_height(&self) -> f32 {
        self.sections.last().map_or(0.0, |(_, rect)| rect.bottom())
    }

    pub fn max_scroll(&self) -> f32 {
        (self.document_height() - self.viewport.height as f32).max(0.0)
    }

    pub fn has_surface(&self, name: SceneName) -> bool {
        self.surfaces.contains(&name)
    }

    /// Scene surface rectangle in document coordinates
    pub fn surface_rect(&self, name: SceneName) -> Option<Rect> {
        if !self.has_surface(name) {
            return None;
        }
        let section = SectionId::ALL.into_iter().find(|id| id.scene() == Some(name))?;
        let rect = self.section(section)?;
        Some(Rect::new(
            rect.x,
            rect.y,
            self.viewport.width as f32,
            self.viewport.height as f32,
        ))
    }

    /// Scene surface rectangle in window coordinates at `scroll`
    pub fn surface_on_screen(&self, name: SceneName, scroll: f32) -> Option<Rect> {
        self.surface_rect(name).map(|rect| rect.translated(0.0, -scroll))
    }

    /// Window-space point relative to a surface, if the point is over it
    pub fn surface_local(&self, name: SceneName, point: Vec2, scroll: f32) -> Option<Vec2> {
        let rect = self.surface_on_screen(name, scroll)?;
        rect.contains(point).then(|| rect.local(point))
    }
}

impl SurfaceHost for PageLayout {
    fn surface_size(&self, name: SceneName) -> Option<SurfaceSize> {
        self.has_surface(name).then_some(self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_stack_in_order() {
        let layout = PageLayout::with_all_surfaces(SurfaceSize::new(1200, 800));
        let tops: Vec<f32> = layout.sections().map(|(_, rect)| rect.y).collect();
        assert_eq!(tops, vec![0.0, 800.0, 1600.0, 2400.0, 3200.0]);
        assert_eq!(layout.document_height(), 4000.0);
        assert_eq!(layout.max_scroll(), 3200.0);
    }

    #[test]
    fn test_short_window_uses_min_height() {
        let layout = PageLayout::with_all_surfaces(SurfaceSize::new(800, 400));
        assert_eq!(layout.section(SectionId::About).map(|r| r.y), Some(MIN_SECTION_HEIGHT));
    }

    #[test]
    fn test_anchor_resolution() {
        let layout = PageLayout::with_all_surfaces(SurfaceSize::new(1200, 800));
        assert_eq!(layout.anchor_top("#skills"), Some(1600.0));
        assert_eq!(layout.anchor_top("#missing"), None);
        assert_eq!(layout.anchor_top("skills"), None);
    }

    #[test]
    fn test_missing_surface_reports_none() {
        let layout = PageLayout::new(SurfaceSize::new(640, 480), [SceneName::Hero]);
        assert_eq!(layout.surface_size(SceneName::Hero), Some(SurfaceSize::new(640, 480)));
        assert_eq!(layout.surface_size(SceneName::About), None);
        assert_eq!(layout.surface_rect(SceneName::Contact), None);
    }

    #[test]
    fn test_surface_local_tracks_scroll() {
        let layout = PageLayout::with_all_surfaces(SurfaceSize::new(1000, 800));
        let point = Vec2::new(100.0, 50.0);

        assert_eq!(layout.surface_local(SceneName::Hero, point, 0.0), Some(point));
        assert_eq!(layout.surface_local(SceneName::Hero, point, 900.0), None);
        assert_eq!(
            layout.surface_local(SceneName::About, point, 900.0),
            Some(Vec2::new(100.0, 150.0))
        );
    }

    #[test]
    fn test_vertical_overlap() {
        let rect = Rect::new(0.0, 100.0, 10.0, 100.0);
        assert_eq!(rect.vertical_overlap(0.0, 150.0), 50.0);
        assert_eq!(rect.vertical_overlap(300.0, 400.0), 0.0);
    }
}
