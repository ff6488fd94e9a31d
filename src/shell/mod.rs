//! Terminal front-end.
//!
//! Reads lines from the player, rejects bad input before it reaches the
//! driver, forwards guesses and resets, and renders every snapshot the
//! driver publishes. Guesses are refused while the game is over and reset
//! is only offered then.

pub mod input;
pub mod render;

pub use input::{parse_command, parse_guess, InputError, ShellCommand};

use crate::config::GameConfig;
use crate::driver::{DriverError, GameHandle};
use crate::snapshot::SessionSnapshot;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::watch;
use tracing::debug;

/// How snapshots are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable screens
    Text,
    /// One JSON snapshot per line
    Json,
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A running terminal session bound to one driver.
pub struct Shell<O> {
    handle: GameHandle,
    config: GameConfig,
    snapshots: watch::Receiver<SessionSnapshot>,
    shown: SessionSnapshot,
    output: O,
    format: OutputFormat,
}

impl<O: AsyncWrite + Unpin> Shell<O> {
    pub fn new(handle: GameHandle, config: GameConfig, output: O, format: OutputFormat) -> Self {
        let mut snapshots = handle.subscribe();
        let shown = snapshots.borrow_and_update().clone();
        Self {
            handle,
            config,
            snapshots,
            shown,
            output,
            format,
        }
    }

    /// Play until the player quits, input ends, or the driver stops.
    ///
    /// The driver is shut down on the way out.
    pub async fn run<I>(mut self, input: I) -> Result<O, ShellError>
    where
        I: AsyncBufRead + Unpin,
    {
        let first = self.shown.clone();
        self.show(&first, true).await?;
        let mut lines = input.lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if !self.handle_line(&line).await? {
                        break;
                    }
                }
                changed = self.snapshots.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.render_latest().await?;
                }
            }
        }

        if let Err(err) = self.handle.shutdown().await {
            debug!(error = %err, "driver already stopped");
        }
        Ok(self.output)
    }

    /// Act on one line of input. Returns `false` when the player quits.
    async fn handle_line(&mut self, line: &str) -> Result<bool, ShellError> {
        let is_over = self.snapshots.borrow().is_over;

        match parse_command(line, &self.config) {
            Ok(ShellCommand::Quit) => return Ok(false),
            Ok(ShellCommand::Reset) if is_over => {
                self.handle.reset().await?;
                self.await_update().await?;
            }
            Ok(ShellCommand::Reset) => {
                self.notice("Reset is available once the game is over.")
                    .await?;
            }
            Ok(ShellCommand::Guess(_)) if is_over => {
                self.notice("The game is over. Type r to play again.")
                    .await?;
            }
            Ok(ShellCommand::Guess(value)) => {
                self.handle.guess(value).await?;
                self.await_update().await?;
            }
            Err(err) => {
                debug!(error = %err, "input rejected");
                let notice = input::invalid_guess_notice(&self.config);
                self.notice(&notice).await?;
            }
        }
        Ok(true)
    }

    /// Wait for the driver to publish the effect of a command.
    ///
    /// Something is always published: either the command's own result, or
    /// the game-ending tick that made the driver ignore it.
    async fn await_update(&mut self) -> Result<(), ShellError> {
        self.snapshots
            .changed()
            .await
            .map_err(|_| DriverError::Closed)?;
        self.render_latest().await
    }

    async fn render_latest(&mut self) -> Result<(), ShellError> {
        let next = self.snapshots.borrow_and_update().clone();
        self.show(&next, false).await?;
        self.shown = next;
        Ok(())
    }

    async fn show(&mut self, next: &SessionSnapshot, redraw: bool) -> Result<(), ShellError> {
        let text = match self.format {
            OutputFormat::Json => Some(format!("{}\n", serde_json::to_string(next)?)),
            OutputFormat::Text if redraw => Some(render::screen(next, &self.config)),
            OutputFormat::Text => render::update(&self.shown, next, &self.config),
        };
        if let Some(text) = text {
            self.write(&text).await?;
        }
        Ok(())
    }

    async fn notice(&mut self, text: &str) -> Result<(), ShellError> {
        match self.format {
            OutputFormat::Text => self.write(&format!("! {text}\n")).await,
            OutputFormat::Json => {
                let line = serde_json::json!({ "notice": text });
                self.write(&format!("{line}\n")).await
            }
        }
    }

    async fn write(&mut self, text: &str) -> Result<(), ShellError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
