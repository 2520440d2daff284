//! Fox and hounds in the terminal.

#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;
use console::Console;
use std::io;
use strictly_foxhounds::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with the board on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;
    let dimension = cli.requested_dimension().unwrap_or(*config.dimension());
    info!(dimension, config = %cli.config.display(), "Starting fox and hounds");

    let mut game = Game::new(dimension)?;
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    console.run(&mut game)
}
