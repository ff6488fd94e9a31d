//! Core game types and logic.
//!
//! This module contains the pure core of the game:
//! - The session phases and wrong-guess hints
//! - Immutable phase transition history
//! - The [`Session`] itself, with guess evaluation and countdown
//!
//! Nothing here does I/O or owns a timer; ticks are delivered by whoever
//! holds the session.

mod history;
mod phase;
mod session;

pub use history::{PhaseHistory, PhaseTransition};
pub use phase::{Hint, Phase};
pub use session::{GuessOutcome, Session, TickOutcome};
