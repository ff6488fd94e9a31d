//! Client side of a running driver.

use super::{Command, DriverError};
use crate::snapshot::SessionSnapshot;
use tokio::sync::{mpsc, watch};

/// Cheap, cloneable handle to a [`GameDriver`](super::GameDriver).
///
/// When every handle is dropped the driver stops and releases its timer.
#[derive(Clone, Debug)]
pub struct GameHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

impl GameHandle {
    pub(crate) fn new(
        commands: mpsc::Sender<Command>,
        snapshots: watch::Receiver<SessionSnapshot>,
    ) -> Self {
        Self {
            commands,
            snapshots,
        }
    }

    /// Submit a guess. Input validation is the caller's job.
    pub async fn guess(&self, value: i32) -> Result<(), DriverError> {
        self.send(Command::Guess(value)).await
    }

    /// Replace the session with a fresh one and restart the countdown.
    pub async fn reset(&self) -> Result<(), DriverError> {
        self.send(Command::Reset).await
    }

    /// Stop the driver. Its timer is released before the task exits.
    pub async fn shutdown(&self) -> Result<(), DriverError> {
        self.send(Command::Shutdown).await
    }

    async fn send(&self, command: Command) -> Result<(), DriverError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| DriverError::Closed)
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that observes every future snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// Wait for the next snapshot this handle has not seen yet.
    ///
    /// Fails with [`DriverError::Closed`] once the driver has stopped.
    pub async fn changed(&mut self) -> Result<SessionSnapshot, DriverError> {
        self.snapshots
            .changed()
            .await
            .map_err(|_| DriverError::Closed)?;
        Ok(self.snapshots.borrow_and_update().clone())
    }
}
