//! Strictly Console - terminal entry point
//!
//! Builds the players and the game from configuration and plays one game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_console::{AutomatedPlayer, Game, GameConfig, HumanPlayer, Mark, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;

    match cli.command.unwrap_or_default() {
        Command::Play => run_play(&config).await,
        Command::Watch => run_watch(&config).await,
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&cli.config)?;

    if let Some(think_time_ms) = cli.think_time_ms {
        info!(think_time_ms, "Overriding think time");
        config = config.with_think_time_ms(think_time_ms);
    }
    if let Some(seed) = cli.seed {
        info!(seed, "Overriding seed");
        config = config.with_seed(seed);
    }

    Ok(config)
}

fn automated(config: &GameConfig, name: &str, mark: Mark, seed_offset: u64) -> Box<dyn Player> {
    let player = AutomatedPlayer::console(name, mark).with_think_time(config.think_time());
    match config.seed() {
        Some(seed) => Box::new(player.with_seed(seed.wrapping_add(seed_offset))),
        None => Box::new(player),
    }
}

/// AI (X) against the human at the console (O).
#[instrument(skip(config))]
async fn run_play(config: &GameConfig) -> Result<()> {
    let ai = automated(config, config.ai_name(), Mark::X, 0);
    let human = Box::new(HumanPlayer::console(config.human_name().clone(), Mark::O));

    let mut game = Game::console(ai, human)?;
    game.run().await?;
    Ok(())
}

/// Two AI players against each other.
#[instrument(skip(config))]
async fn run_watch(config: &GameConfig) -> Result<()> {
    let first = automated(config, &format!("{} 1", config.ai_name()), Mark::X, 0);
    let second = automated(config, &format!("{} 2", config.ai_name()), Mark::O, 1);

    let mut game = Game::console(first, second)?;
    game.run().await?;
    Ok(())
}
