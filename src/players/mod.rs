//! Player trait and implementations.

mod automated;
mod human;

pub use automated::AutomatedPlayer;
pub use human::HumanPlayer;

use crate::games::tictactoe::{Board, Mark};
use anyhow::Result;

/// Trait for players that can take a turn.
///
/// A turn both picks and applies the move: the implementation calls
/// [`Board::make_move`] with its own mark until it succeeds, then returns
/// the position it played. Invalid attempts are retried internally; the
/// error channel is reserved for I/O failures.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Applies exactly one move to `board` and returns its position (0-8).
    async fn take_turn(&mut self, board: &mut Board) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the player's mark.
    fn mark(&self) -> Mark;
}
