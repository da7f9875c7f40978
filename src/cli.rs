//! Command-line interface for strictly_console.

use clap::{Parser, Subcommand};

/// Strictly Console - tic-tac-toe on the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_console")]
#[command(about = "Play tic-tac-toe against a random AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to game configuration file
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Override the AI thinking time in milliseconds
    #[arg(long, global = true)]
    pub think_time_ms: Option<u64>,

    /// Seed the AI for a reproducible game
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Play as O against the AI (X moves first)
    #[default]
    Play,

    /// Watch two AI players play each other
    Watch,
}
