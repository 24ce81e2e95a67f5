//! Ludo - play a four-player game in the terminal.
//!
//! Commands are read line by line from stdin; type `help` for the list.
//! Engine logs go to stderr.

mod command;
mod config;
mod render;
mod session;

use anyhow::Context;
use clap::Parser;
use config::LudoConfig;
use ludo_engine::RandomDice;
use session::Session;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Ludo - four-player rules engine in the terminal.
#[derive(Parser)]
#[command(name = "ludo")]
#[command(about = "Play four-player Ludo in the terminal")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = LudoConfig::DEFAULT_PATH)]
    config: PathBuf,

    /// Dice seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = LudoConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    let level: LevelFilter = config
        .log_level
        .parse()
        .with_context(|| format!("invalid log level '{}'", config.log_level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Config: {:?}", cli.config);
    tracing::info!("Turn order: {:?}", config.colors);
    let dice = match config.seed {
        Some(seed) => {
            tracing::info!("Dice seed: {}", seed);
            RandomDice::seeded(seed)
        }
        None => RandomDice::from_entropy(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        stdin.lock(),
        stdout.lock(),
        config.rules,
        config.colors,
        Box::new(dice),
    );
    session.execute(command::Command::Help)?;
    session.execute(command::Command::Start(None))?;
    session.run()?;

    let game = session.game();
    tracing::info!(
        "Session ended after {} moves, winner: {:?}",
        game.move_history().len(),
        game.winner()
    );
    Ok(())
}
