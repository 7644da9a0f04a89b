use std::collections::BTreeSet;

use super::layout::{PageLayout, Rect, SectionId};

pub const REVEAL_THRESHOLD: f32 = 0.1;
/// Bottom inset of the observed viewport band
pub const ROOT_MARGIN_BOTTOM: f32 = -50.0;

/// Fraction of `rect` inside the viewport band at `scroll`
pub fn intersection_ratio(rect: Rect, scroll: f32, viewport_height: f32, margin_bottom: f32) -> f32 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    let top = scroll;
    let bottom = scroll + viewport_height + margin_bottom;
    rect.vertical_overlap(top, bottom) / rect.height
}

/// Visibility watcher that reveals each section once
///
/// Sections stay revealed after they scroll out again.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f32,
    margin_bottom: f32,
    revealed: BTreeSet<SectionId>,
}

impl RevealObserver {
    pub fn new() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            margin_bottom: ROOT_MARGIN_BOTTOM,
            revealed: BTreeSet::new(),
        }
    }

    /// Check every section and return the ones revealed by this call
    pub fn observe(&mut self, layout: &PageLayout, scroll: f32) -> Vec<SectionId> {
        let viewport_height = layout.viewport().height as f32;
        let mut newly = Vec::new();

        for (id, rect) in layout.sections() {
            if self.revealed.contains(&id) {
                continue;
            }
            let ratio = intersection_ratio(rect, scroll, viewport_height, self.margin_bottom);
            if ratio > 0.0 && ratio >= self.threshold {
                self.revealed.insert(id);
                newly.push(id);
            }
        }

        newly
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.contains(&id)
    }
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new()
    }
}
