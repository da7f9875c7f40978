//! Automated player that moves at random after a simulated thinking delay.

use super::Player;
use crate::games::tictactoe::{Board, CELLS, Mark};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tracing::{debug, instrument};

/// Nominal thinking time before each move.
pub const DEFAULT_THINK_TIME: Duration = Duration::from_millis(1000);

/// Random player.
///
/// Samples uniformly over all nine positions and retries until it hits an
/// open cell, so later moves take more draws than early ones.
pub struct AutomatedPlayer<W> {
    name: String,
    mark: Mark,
    think_time: Duration,
    rng: StdRng,
    output: W,
}

impl AutomatedPlayer<Stdout> {
    /// Creates an automated player announcing its moves on stdout.
    pub fn console(name: impl Into<String>, mark: Mark) -> Self {
        Self::new(name, mark, tokio::io::stdout())
    }
}

impl<W> AutomatedPlayer<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a new automated player seeded from OS entropy.
    pub fn new(name: impl Into<String>, mark: Mark, output: W) -> Self {
        Self {
            name: name.into(),
            mark,
            think_time: DEFAULT_THINK_TIME,
            rng: StdRng::from_os_rng(),
            output,
        }
    }

    /// Sets the simulated thinking time.
    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }

    /// Seeds the random number generator for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Everything written to the player's output.
    pub fn output(&self) -> &W {
        &self.output
    }

    async fn say(&mut self, message: &str) -> Result<()> {
        self.output.write_all(message.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl<W> Player for AutomatedPlayer<W>
where
    W: AsyncWrite + Unpin + Send,
{
    #[instrument(skip(self, board), fields(player = %self.name, mark = %self.mark))]
    async fn take_turn(&mut self, board: &mut Board) -> Result<usize> {
        let announcement = format!("{}'s turn ({}).", self.name, self.mark);
        self.say(&announcement).await?;

        tokio::time::sleep(self.think_time).await;

        let mut attempts = 0usize;
        let position = loop {
            attempts += 1;
            let candidate = self.rng.random_range(0..CELLS);
            if board.make_move(candidate, self.mark) {
                break candidate;
            }
        };
        debug!(position, attempts, "Automated move applied");

        let choice = format!("{} chose position: {}", self.name, position);
        self.say(&choice).await?;
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
