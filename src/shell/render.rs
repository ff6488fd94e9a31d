//! Text rendering of snapshots.

use crate::config::GameConfig;
use crate::core::Phase;
use crate::snapshot::SessionSnapshot;

pub const TITLE: &str = "Number Guessing Game";

/// Full screen for a snapshot: title, countdown, message, and either the
/// prompt or the end-of-game summary.
pub fn screen(snapshot: &SessionSnapshot, config: &GameConfig) -> String {
    let mut out = format!(
        "{TITLE}\n{}\n\n{}\n",
        time_left(snapshot.seconds_remaining),
        snapshot.message
    );
    if snapshot.is_over {
        out.push_str(&summary(snapshot));
        out.push_str("Type r to play again or q to quit.\n");
    } else {
        out.push_str(&format!(
            "Your guess ({}-{}), q to quit:\n",
            config.min(), config.max()
        ));
    }
    out
}

pub fn time_left(seconds: u32) -> String {
    format!("Time left: {seconds}s")
}

/// One-line account of a finished game.
pub fn summary(snapshot: &SessionSnapshot) -> String {
    let guesses = snapshot.guesses.len();
    let plural = if guesses == 1 { "" } else { "es" };
    let secs = snapshot.elapsed_ms as f64 / 1000.0;
    match snapshot.phase {
        Phase::Won => format!("You won with {guesses} guess{plural} in {secs:.1}s.\n"),
        Phase::OutOfAttempts | Phase::TimedOut => {
            format!("Game over after {guesses} guess{plural} ({secs:.1}s).\n")
        }
        Phase::Active => String::new(),
    }
}

/// Countdown values worth printing on their own: every ten seconds and
/// the last five.
pub fn announces(seconds: u32) -> bool {
    seconds % 10 == 0 || seconds <= 5
}

/// Text to print when moving from `prev` to `next`, if any.
///
/// A new session or a new message redraws the screen; a plain tick only
/// prints the countdown at announced values.
pub fn update(
    prev: &SessionSnapshot,
    next: &SessionSnapshot,
    config: &GameConfig,
) -> Option<String> {
    if prev.id != next.id || prev.message != next.message {
        return Some(screen(next, config));
    }
    if prev.seconds_remaining != next.seconds_remaining && announces(next.seconds_remaining) {
        return Some(format!("{}\n", time_left(next.seconds_remaining)));
    }
    None
}
