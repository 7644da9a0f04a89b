use std::collections::BTreeMap;

/// Section reveal and skill-bar transitions
pub const REVEAL_STYLES: &str = "\
section { opacity: 0; transform: translateY(50px); transition: all 0.8s ease-out; }
section.animate-in { opacity: 1; transform: translateY(0); }
.skill-progress { width: 0 !important; transition: width 1.5s ease-out 0.5s; }
.skills.animate-in .skill-progress { width: var(--skill-width) !important; }
";

/// Gradient cover shown until the page has loaded
pub const LOADING_STYLES: &str = "\
body:not(.loaded) { overflow: hidden; }
body:not(.loaded)::before { content: ''; position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
background: linear-gradient(135deg, #0f1419 0%, #1a1f35 50%, #2d1b69 100%); z-index: 10000; transition: opacity 0.5s ease; }
body.loaded::before { opacity: 0; pointer-events: none; }
";

/// Named style blocks injected into the document head
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    blocks: BTreeMap<&'static str, &'static str>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject `css` under `name`; false if that name is already present
    pub fn inject(&mut self, name: &'static str, css: &'static str) -> bool {
        if self.blocks.contains_key(name) {
            return false;
        }
        log::debug!("injecting '{name}' styles");
        self.blocks.insert(name, css);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Every block, concatenated in name order
    pub fn text(&self) -> String {
        self.blocks.values().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_once() {
        let mut sheet = StyleSheet::new();
        assert!(sheet.inject("reveal", REVEAL_STYLES));
        assert!(!sheet.inject("reveal", REVEAL_STYLES));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_text_contains_blocks() {
        let mut sheet = StyleSheet::new();
        sheet.inject("loading", LOADING_STYLES);
        sheet.inject("reveal", REVEAL_STYLES);
        let text = sheet.text();
        assert!(text.contains("body.loaded::before"));
        assert!(text.contains("section.animate-in"));
    }
}
