//! Numguess: a timed number-guessing game
//!
//! The player has a fixed number of attempts and a countdown to find a
//! number drawn from a range (by default 3 attempts, 60 seconds, 0 to 100).
//! Wrong guesses get a "higher" or "lower" hint.
//!
//! The crate follows a "pure core, imperative shell" layout:
//!
//! - [`core`]: the [`Session`] state machine. Pure, no timers, no I/O.
//! - [`config`]: the rules of a game, validated on construction.
//! - [`snapshot`]: immutable views of a session handed to front-ends.
//! - [`driver`]: one tokio task owning a session, serializing ticks and
//!   player commands.
//! - [`shell`]: the terminal front-end used by the `numguess` binary.
//!
//! # Example
//!
//! ```rust
//! use numguess::config::GameConfig;
//! use numguess::core::{Phase, Session, TickOutcome};
//!
//! let mut session = Session::with_target(GameConfig::default(), 57);
//! for _ in 0..59 {
//!     session.on_tick();
//! }
//! assert_eq!(session.on_tick(), TickOutcome::TimedOut);
//! assert_eq!(session.phase(), Phase::TimedOut);
//! assert_eq!(session.message(), "Time's up. The number was 57");
//! ```

pub mod config;
pub mod core;
pub mod driver;
pub mod shell;
pub mod snapshot;

// Re-export commonly used types
pub use self::config::GameConfig;
pub use self::core::{GuessOutcome, Hint, Phase, Session, TickOutcome};
pub use driver::{GameDriver, GameHandle};
pub use snapshot::SessionSnapshot;
