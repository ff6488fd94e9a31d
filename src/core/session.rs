//! The game session: target, attempts, countdown and end state.
//!
//! A [`Session`] is mutated only by [`Session::make_guess`] and
//! [`Session::on_tick`]. Both are no-ops once the session is over, so at
//! most one terminal transition can happen no matter how guesses and ticks
//! interleave. [`Session::reset`] replaces the whole value.

use super::history::{PhaseHistory, PhaseTransition};
use super::phase::{Hint, Phase};
use crate::config::GameConfig;
use chrono::Utc;
use rand::Rng;
use std::time::Duration;
use uuid::Uuid;

/// What a guess did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The session was already over; nothing changed.
    Ignored,
    /// Wrong guess, attempts remain.
    Hint { hint: Hint, attempts_remaining: u32 },
    /// Correct guess; the session is over.
    Won,
    /// Wrong guess that used the last attempt; the session is over.
    OutOfAttempts { hint: Hint },
}

/// What a tick did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was already over; nothing changed.
    Ignored,
    /// One second counted down, time remains.
    Counted { seconds_remaining: u32 },
    /// The countdown hit zero; the session is over.
    TimedOut,
}

/// One play-through, from target selection to termination.
///
/// # Example
///
/// ```rust
/// use numguess::config::GameConfig;
/// use numguess::core::{GuessOutcome, Hint, Session};
///
/// let mut session = Session::with_target(GameConfig::default(), 57);
///
/// assert_eq!(
///     session.make_guess(10),
///     GuessOutcome::Hint { hint: Hint::Higher, attempts_remaining: 2 }
/// );
/// assert_eq!(session.make_guess(57), GuessOutcome::Won);
/// assert!(session.is_over());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    id: Uuid,
    config: GameConfig,
    target: i32,
    attempts_remaining: u32,
    seconds_remaining: u32,
    message: String,
    phase: Phase,
    guesses: Vec<i32>,
    history: PhaseHistory,
}

impl Session {
    /// Start a session with a target drawn uniformly from the config's range.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let target = rng.gen_range(config.min()..=config.max());
        Self::with_target(config, target)
    }

    /// Start a session with a known target.
    ///
    /// The target must lie in the config's range.
    pub fn with_target(config: GameConfig, target: i32) -> Self {
        debug_assert!(
            config.contains(target),
            "target {target} outside {}..={}",
            config.min(),
            config.max()
        );
        Self {
            id: Uuid::new_v4(),
            target,
            attempts_remaining: config.max_attempts(),
            seconds_remaining: config.time_limit_secs(),
            message: welcome(&config),
            phase: Phase::Active,
            guesses: Vec::new(),
            history: PhaseHistory::starting_at(Utc::now()),
            config,
        }
    }

    /// Discard this session and start a fresh one with a new target.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(self.config.clone(), rng);
    }

    /// Evaluate a guess.
    ///
    /// Values outside the configured range are not rejected; they simply
    /// never match the target.
    pub fn make_guess(&mut self, value: i32) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::Ignored;
        }
        self.guesses.push(value);

        if value == self.target {
            self.finish(Phase::Won, format!("Correct! It was {}", self.target));
            return GuessOutcome::Won;
        }

        let hint = Hint::for_guess(value, self.target);
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);

        if self.attempts_remaining == 0 {
            self.finish(
                Phase::OutOfAttempts,
                format!(
                    "Out of attempts. It was {} (last hint: {hint})",
                    self.target
                ),
            );
            return GuessOutcome::OutOfAttempts { hint };
        }

        self.message = format!(
            "The number is {hint}. Attempts left: {}",
            self.attempts_remaining
        );
        GuessOutcome::Hint {
            hint,
            attempts_remaining: self.attempts_remaining,
        }
    }

    /// Count down one tick.
    pub fn on_tick(&mut self) -> TickOutcome {
        if self.is_over() || self.seconds_remaining == 0 {
            return TickOutcome::Ignored;
        }
        self.seconds_remaining -= 1;

        if self.seconds_remaining == 0 {
            self.finish(
                Phase::TimedOut,
                format!("Time's up. The number was {}", self.target),
            );
            return TickOutcome::TimedOut;
        }
        TickOutcome::Counted {
            seconds_remaining: self.seconds_remaining,
        }
    }

    /// Move the start of the session clock to now.
    ///
    /// Has no effect once the game has ended.
    pub(crate) fn restart_clock(&mut self) {
        if self.history.transitions().is_empty() {
            self.history = PhaseHistory::starting_at(Utc::now());
        }
    }

    fn finish(&mut self, phase: Phase, message: String) {
        let transition = PhaseTransition {
            from: self.phase,
            to: phase,
            timestamp: Utc::now(),
            guesses: self.guesses.len(),
        };
        self.history = self.history.record(transition);
        self.phase = phase;
        self.message = message;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The number to guess. Fixed for the session's lifetime.
    pub fn target(&self) -> i32 {
        self.target
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Guesses accepted so far, in order.
    pub fn guesses(&self) -> &[i32] {
        &self.guesses
    }

    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    /// Wall-clock time from start to the end of the game, or to now while
    /// the game is still running.
    pub fn elapsed(&self) -> Duration {
        self.history.duration().unwrap_or_else(|| {
            Utc::now()
                .signed_duration_since(self.history.started_at())
                .to_std()
                .unwrap_or(Duration::ZERO)
        })
    }
}

fn welcome(config: &GameConfig) -> String {
    format!("Guess a number between {} and {}!", config.min(), config.max())
}
