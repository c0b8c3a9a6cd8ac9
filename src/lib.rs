//! transgo-admin library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Shifts { action } => cli::commands::shifts::handle(action, cfg),
        Commands::Journal { action } => cli::commands::export::handle_journal(action, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // test mode never reads the user's config file
    let loaded = if cli.test {
        Config::default()
    } else {
        match Config::load() {
            Ok(c) => c,
            // init/config must still work to repair a broken file
            Err(e) if matches!(cli.command, Commands::Init | Commands::Config { .. }) => {
                ui::messages::warning(format!("{e}; using defaults"));
                Config::default()
            }
            Err(e) => return Err(e),
        }
    };

    let cfg = loaded.with_overrides(cli.api_url.as_deref(), cli.token.as_deref());

    dispatch(&cli, &cfg)
}
