pub mod cli;
pub mod config;
pub mod core;
pub mod page;
pub mod portfolio;
pub mod scenes;
pub mod ui;

pub use config::PortfolioConfig;
pub use portfolio::Portfolio;
pub use scenes::setup_scenes;
