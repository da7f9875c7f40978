//! Human player that reads moves from line-based console input.

use super::Player;
use crate::games::tictactoe::{Board, CELLS, Mark};
use anyhow::Result;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tracing::{debug, instrument};

/// Human player answering prompts one line at a time.
///
/// Generic over its input and output so the console can be swapped for
/// in-memory buffers.
pub struct HumanPlayer<R, W> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
    rejected_attempts: usize,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// Creates a human player bound to stdin and stdout.
    pub fn console(name: impl Into<String>, mark: Mark) -> Self {
        Self::new(
            name,
            mark,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        )
    }
}

impl<R, W> HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, mark: Mark, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            mark,
            input,
            output,
            rejected_attempts: 0,
        }
    }

    /// Number of inputs rejected so far (unparseable, out of range or occupied).
    pub fn rejected_attempts(&self) -> usize {
        self.rejected_attempts
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

    async fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            anyhow::bail!("Input stream closed");
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    async fn reject(&mut self, message: &str) -> Result<()> {
        self.rejected_attempts += 1;
        self.say(message).await
    }
}

/// Parses a line as a board position, `None` unless it is an integer in 0-8.
fn parse_position(line: &str) -> Option<usize> {
    line.trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n < CELLS)
}

#[async_trait::async_trait]
impl<R, W> Player for HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    #[instrument(skip(self, board), fields(player = %self.name, mark = %self.mark))]
    async fn take_turn(&mut self, board: &mut Board) -> Result<usize> {
        loop {
            let prompt = format!(
                "{}'s turn ({}). Please enter a position (0-8):",
                self.name, self.mark
            );
            self.say(&prompt).await?;

            let line = self.read_line().await?;
            let Some(position) = parse_position(&line) else {
                debug!(input = %line.trim(), "Rejected input");
                self.reject("Invalid input. Please enter a position between 0 and 8.")
                    .await?;
                continue;
            };

            if board.make_move(position, self.mark) {
                debug!(position, "Human move applied");
                return Ok(position);
            }

            debug!(position, "Rejected occupied position");
            self.reject("Position already taken, try again.").await?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
