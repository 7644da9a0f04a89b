// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::core::SceneName;

#[derive(Parser, Debug, Clone)]
#[command(name = "portfolio3d")]
#[command(about = "Animated 3D portfolio page", long_about = None)]
pub struct Cli {
    /// Disable the page overlay and FPS logging
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Seed for scene placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Leave a scene's surface off the page (hero, about, contact)
    #[arg(long = "without", value_parser = parse_scene_name)]
    pub without: Vec<SceneName>,
}

fn parse_scene_name(name: &str) -> Result<SceneName, String> {
    SceneName::parse(name).ok_or_else(|| format!("unknown scene '{name}' (expected hero, about or contact)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["portfolio3d"]);
        assert!(!cli.no_ui);
        assert!(cli.seed.is_none());
        assert!(cli.without.is_empty());
    }

    #[test]
    fn test_without_is_repeatable() {
        let cli = Cli::parse_from(["portfolio3d", "--without", "hero", "--without", "contact"]);
        assert_eq!(cli.without, vec![SceneName::Hero, SceneName::Contact]);
    }

    #[test]
    fn test_unknown_scene_rejected() {
        assert!(Cli::try_parse_from(["portfolio3d", "--without", "footer"]).is_err());
    }
}
