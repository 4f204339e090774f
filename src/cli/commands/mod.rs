//! CLI command handlers, one file per command.

mod build;
mod config;
mod menu;
mod prune;

pub use build::run_build;
pub use config::run_config;
pub use menu::run_menu;
pub use prune::run_prune;
