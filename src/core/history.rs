//! Phase transition history.
//!
//! Records when a session left `Active` and why. A session makes at most
//! one such transition, but the history stays a list so the invariant can
//! be checked rather than assumed.

use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use numguess::core::{Phase, PhaseTransition};
/// use chrono::Utc;
///
/// let transition = PhaseTransition {
///     from: Phase::Active,
///     to: Phase::Won,
///     timestamp: Utc::now(),
///     guesses: 2,
/// };
/// assert!(transition.to.is_over());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being left
    pub from: Phase,
    /// The phase being entered
    pub to: Phase,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Guesses accepted before the transition
    pub guesses: usize,
}

/// Ordered history of phase transitions for one session.
///
/// `record` returns a new history and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use numguess::core::{Phase, PhaseHistory, PhaseTransition};
/// use chrono::Utc;
///
/// let history = PhaseHistory::starting_at(Utc::now());
/// let history = history.record(PhaseTransition {
///     from: Phase::Active,
///     to: Phase::TimedOut,
///     timestamp: Utc::now(),
///     guesses: 0,
/// });
///
/// assert_eq!(history.get_path(), vec![&Phase::Active, &Phase::TimedOut]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhaseHistory {
    started_at: DateTime<Utc>,
    transitions: Vec<PhaseTransition>,
}

impl PhaseHistory {
    /// Create an empty history for a session that started at `started_at`.
    pub fn starting_at(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self {
            started_at: self.started_at,
            transitions,
        }
    }

    /// Phases traversed: the first `from`, then each `to`.
    ///
    /// Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time from session start to the last recorded transition.
    ///
    /// Returns `None` until a transition has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        self.transitions.last().map(|last| {
            last.timestamp
                .signed_duration_since(self.started_at)
                .to_std()
                .unwrap_or(Duration::ZERO)
        })
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    /// The terminal transition, if the session has ended.
    pub fn ending(&self) -> Option<&PhaseTransition> {
        self.transitions.iter().find(|t| t.to.is_over())
    }
}
