//! Game phases.
//!
//! A session is either `Active` or over with one of three outcomes. The
//! three terminal variants are the "Over" state; they only differ in why
//! the game ended.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a session sits in its lifecycle.
///
/// All methods are pure.
///
/// # Example
///
/// ```rust
/// use numguess::core::Phase;
///
/// assert!(!Phase::Active.is_over());
/// assert!(Phase::Won.is_over());
/// assert!(Phase::TimedOut.is_loss());
/// assert_eq!(Phase::OutOfAttempts.name(), "OutOfAttempts");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Guesses are accepted and the countdown runs.
    Active,
    /// The player guessed the target.
    Won,
    /// The last attempt was used without hitting the target.
    OutOfAttempts,
    /// The countdown reached zero.
    TimedOut,
}

impl Phase {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Won => "Won",
            Self::OutOfAttempts => "OutOfAttempts",
            Self::TimedOut => "TimedOut",
        }
    }

    /// Terminal phases accept no further guesses or ticks.
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::Active)
    }

    /// The game ended without a correct guess.
    pub fn is_loss(&self) -> bool {
        matches!(self, Self::OutOfAttempts | Self::TimedOut)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction from a wrong guess towards the target.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Hint {
    /// The target is higher than the guess.
    Higher,
    /// The target is lower than the guess.
    Lower,
}

impl Hint {
    /// Compare a wrong guess with the target.
    ///
    /// Only meaningful when `guess != target`; an equal guess maps to `Lower`.
    pub fn for_guess(guess: i32, target: i32) -> Self {
        if guess < target {
            Self::Higher
        } else {
            Self::Lower
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Higher => "HIGHER",
            Self::Lower => "LOWER",
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
