//! tttt library root.
//! Exposes the CLI parser, the high-level run() function, and the core
//! session/aggregation modules used by the host surface.

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
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Sum { .. } => cli::commands::sum::handle(&cli.command, cfg),
        Commands::Interactive => cli::commands::interactive::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load()?;
    dispatch(&cli, &cfg)
}
