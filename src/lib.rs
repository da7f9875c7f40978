//! Strictly Console - tic-tac-toe on the terminal
//!
//! Two players take turns against a shared board until one completes a
//! line or the board fills up.
//!
//! # Architecture
//!
//! - **Board**: 9-cell grid with move validation and win/draw detection
//! - **Players**: async [`Player`] trait with human (console) and automated
//!   (random, simulated thinking time) implementations
//! - **Game**: turn loop that hands the board to each player in turn
//!
//! # Example
//!
//! ```no_run
//! use strictly_console::{AutomatedPlayer, Game, HumanPlayer, Mark};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let ai = AutomatedPlayer::console("AI Player", Mark::X);
//! let human = HumanPlayer::console("Human Player", Mark::O);
//!
//! let mut game = Game::console(Box::new(ai), Box::new(human))?;
//! let outcome = game.run().await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod game;
mod games;
mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Errors
pub use error::{GameError, GameErrorKind};

// Crate-level exports - Game loop
pub use game::{Game, Outcome};

// Crate-level exports - Players
pub use players::{AutomatedPlayer, HumanPlayer, Player};

// Crate-level exports - Board types (tic-tac-toe)
pub use games::tictactoe::{Board, CELLS, Cell, LINES, Mark};
