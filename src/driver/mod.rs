//! The imperative shell around a [`Session`](crate::core::Session).
//!
//! A [`GameDriver`] is a single tokio task that owns the session. Guesses
//! and resets arrive over a command channel, ticks come from a
//! `tokio::time::Interval`, and one `select!` loop applies them one at a
//! time. After every change a [`SessionSnapshot`](crate::SessionSnapshot)
//! is published on a watch channel.
//!
//! # Timer scope
//!
//! The interval exists only while the session is active. It is created on
//! spawn and on reset, and dropped when the game ends, when reset replaces
//! the session, and when the driver stops.
//!
//! # Example
//!
//! ```rust
//! use numguess::config::GameConfig;
//! use numguess::driver::GameDriver;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), numguess::driver::DriverError> {
//! let mut handle = GameDriver::spawn(GameConfig::default(), StdRng::seed_from_u64(3));
//! assert!(!handle.snapshot().is_over);
//!
//! handle.guess(50).await?;
//! let snapshot = handle.changed().await?;
//! assert_eq!(snapshot.guesses, vec![50]);
//!
//! handle.shutdown().await?;
//! # Ok(())
//! # }
//! ```

mod handle;
mod runner;

pub use handle::GameHandle;
pub use runner::GameDriver;

/// Requests accepted by a running driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Guess(i32),
    Reset,
    Shutdown,
}

/// Errors returned by [`GameHandle`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DriverError {
    #[error("game driver is no longer running")]
    Closed,
}
