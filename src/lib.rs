//! caretally library root.
//! Exposes the CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
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
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, cli.config.as_deref())
        }
        Commands::Records { .. } => cli::commands::records::handle(&cli.command),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Occupancy { .. } => cli::commands::occupancy::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // one settings snapshot per invocation; the core only ever sees values
    // taken from it
    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
