//! Turn-taking game loop between two players.

use crate::error::{GameError, GameErrorKind};
use crate::games::tictactoe::{Board, Cell, Mark};
use crate::players::Player;
use anyhow::Result;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A player completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// Display name of the winner.
        name: String,
    },
    /// The board filled up with no completed line.
    Draw,
}

/// Runs one game of tic-tac-toe between two players.
///
/// The game owns the board and hands it to the current player each turn;
/// the player applies its own move. Player 0 moves first.
pub struct Game<W> {
    board: Board,
    players: [Box<dyn Player>; 2],
    current: usize,
    history: Vec<usize>,
    output: W,
}

impl Game<Stdout> {
    /// Creates a game that renders to stdout.
    pub fn console(first: Box<dyn Player>, second: Box<dyn Player>) -> Result<Self, GameError> {
        Self::new(first, second, tokio::io::stdout())
    }
}

impl<W> Game<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a new game.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::DuplicateMark`] if both players hold the same mark.
    #[instrument(skip_all, fields(first = %first.name(), second = %second.name()))]
    pub fn new(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        output: W,
    ) -> Result<Self, GameError> {
        if first.mark() == second.mark() {
            return Err(GameErrorKind::DuplicateMark(first.mark()).into());
        }

        Ok(Self {
            board: Board::new(),
            players: [first, second],
            current: 0,
            history: Vec::new(),
            output,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Everything the game has written to its output.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Plays until a player wins or the board is full.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!("Starting game");
        self.say("Starting Tic Tac Toe game!").await?;

        let outcome = loop {
            self.render().await?;

            let player = &mut self.players[self.current];
            let mark = player.mark();
            debug!(player = %player.name(), "Waiting for move");

            let before = self.board.occupied_count();
            let position = player.take_turn(&mut self.board).await?;
            self.check_turn(position, mark, before)?;
            self.history.push(position);

            if let Some(winner) = self.board.check_win() {
                let name = self.players[self.current].name().to_string();
                break Outcome::Won { mark: winner, name };
            }
            if self.board.is_full() {
                break Outcome::Draw;
            }

            self.current = 1 - self.current;
        };

        self.render().await?;
        match &outcome {
            Outcome::Won { mark, .. } => self.say(&format!("{} wins!", mark)).await?,
            Outcome::Draw => self.say("It's a draw!").await?,
        }

        info!(?outcome, moves = self.history.len(), "Game over");
        Ok(outcome)
    }

    /// Verifies the player applied exactly one move with its own mark.
    fn check_turn(&self, position: usize, mark: Mark, before: usize) -> Result<(), GameError> {
        let Some(applied) = self.board.occupied_count().checked_sub(before) else {
            return Err(GameErrorKind::TurnContract(
                "cells were cleared during the turn".to_string(),
            )
            .into());
        };
        if applied != 1 {
            return Err(GameErrorKind::TurnContract(format!(
                "{} cells filled during one turn",
                applied
            ))
            .into());
        }
        if self.board.get(position) != Some(Cell::Occupied(mark)) {
            return Err(GameErrorKind::TurnContract(format!(
                "position {} does not hold {}",
                position, mark
            ))
            .into());
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let board = self.board.render();
        self.say(&board).await
    }

    async fn say(&mut self, message: &str) -> Result<()> {
        self.output.write_all(message.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }
}
