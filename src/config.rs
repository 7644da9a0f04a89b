// config.rs - JSON configuration with CLI overrides
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::scenes::{about, contact, hero};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            width: 1280,
            height: 800,
        }
    }
}

/// Entity counts and tuning for the animated scenes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenesConfig {
    pub hero_shapes: usize,
    pub about_nodes: usize,
    /// Nodes closer than this at build time are linked
    pub link_distance: f32,
    pub contact_particles: usize,
}

impl Default for ScenesConfig {
    fn default() -> Self {
        Self {
            hero_shapes: hero::DEFAULT_SHAPE_COUNT,
            about_nodes: about::DEFAULT_NODE_COUNT,
            link_distance: about::DEFAULT_LINK_DISTANCE,
            contact_particles: contact::DEFAULT_PARTICLE_COUNT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub window: WindowConfig,
    pub scenes: ScenesConfig,
    /// Fixed RNG seed; fresh entropy every run when absent
    pub seed: Option<u64>,
}

impl PortfolioConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid portfolio config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Config file (if any) with command-line flags layered on top
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(width) = cli.width {
            self.window.width = width;
        }
        if let Some(height) = cli.height {
            self.window.height = height;
        }
    }
}
