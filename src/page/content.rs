//! Static page copy

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SITE_TITLE: &str = "Portfolio";

pub const NAV_LINKS: [Link; 5] = [
    Link { label: "Home", href: "#hero" },
    Link { label: "About", href: "#about" },
    Link { label: "Skills", href: "#skills" },
    Link { label: "Projects", href: "#projects" },
    Link { label: "Contact", href: "#contact" },
];

pub const HERO_TITLE: &str = "Creative Developer";
pub const HERO_SUBTITLE: &str = "Building interactive experiences at the intersection of code and design";

pub const HERO_BUTTONS: [Link; 3] = [
    Link { label: "View My Work", href: "#projects" },
    Link { label: "Get In Touch", href: "#contact" },
    Link { label: "Download CV", href: "cv.pdf" },
];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I design and build fast, expressive interfaces with a focus on real-time graphics.",
    "My work spans rendering engines, creative tooling and the occasional generative art piece.",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Bar width in percent
    pub level: f32,
}

pub const SKILLS: [Skill; 6] = [
    Skill { name: "Rust", level: 90.0 },
    Skill { name: "WebGL / wgpu", level: 85.0 },
    Skill { name: "TypeScript", level: 80.0 },
    Skill { name: "Shaders", level: 75.0 },
    Skill { name: "UI Design", level: 70.0 },
    Skill { name: "3D Modelling", level: 60.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Realtime Ray Tracer",
        description: "GPU compute ray tracer with a hierarchical grid.",
        tags: &["Rust", "wgpu", "WGSL"],
    },
    Project {
        title: "Generative Gallery",
        description: "Procedural art installation driven by audio input.",
        tags: &["TypeScript", "WebGL"],
    },
    Project {
        title: "Shader Playground",
        description: "Live-coding editor for fragment shaders.",
        tags: &["Rust", "egui"],
    },
];

pub const CONTACT_BLURB: &str = "Have a project in mind? Send a message and I'll get back to you.";
