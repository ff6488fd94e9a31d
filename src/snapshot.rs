//! Immutable session snapshots.
//!
//! A snapshot is what the presentation side sees of a session. One is
//! produced after every mutation; readers re-render from it instead of
//! holding on to the session.

use crate::core::{Phase, Session};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Observable state of a session at one point in time.
///
/// The target is withheld while the session is active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Session this snapshot was taken from
    pub id: Uuid,

    pub phase: Phase,

    /// Human-readable status line
    pub message: String,

    pub is_over: bool,

    pub seconds_remaining: u32,

    pub attempts_remaining: u32,

    /// Accepted guesses, in order
    pub guesses: Vec<i32>,

    /// Revealed once the session is over
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target: Option<i32>,

    /// Play time so far, frozen once the session is over
    pub elapsed_ms: u64,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,
}

impl Session {
    /// Take a snapshot of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id(),
            phase: self.phase(),
            message: self.message().to_string(),
            is_over: self.is_over(),
            seconds_remaining: self.seconds_remaining(),
            attempts_remaining: self.attempts_remaining(),
            guesses: self.guesses().to_vec(),
            target: self.is_over().then(|| self.target()),
            elapsed_ms: u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX),
            taken_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn active_snapshot_hides_target() {
        let session = Session::with_target(GameConfig::default(), 57);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.id, session.id());
        assert_eq!(snapshot.phase, Phase::Active);
        assert!(!snapshot.is_over);
        assert_eq!(snapshot.seconds_remaining, 60);
        assert_eq!(snapshot.attempts_remaining, 3);
        assert_eq!(snapshot.target, None);
    }

    #[test]
    fn over_snapshot_reveals_target() {
        let mut session = Session::with_target(GameConfig::default(), 57);
        session.make_guess(10);
        session.make_guess(57);
        let snapshot = session.snapshot();

        assert!(snapshot.is_over);
        assert_eq!(snapshot.phase, Phase::Won);
        assert_eq!(snapshot.target, Some(57));
        assert_eq!(snapshot.guesses, vec![10, 57]);
        assert_eq!(snapshot.message, "Correct! It was 57");
    }

    #[test]
    fn snapshot_is_detached_from_session() {
        let mut session = Session::with_target(GameConfig::default(), 57);
        let before = session.snapshot();
        session.on_tick();

        assert_eq!(before.seconds_remaining, 60);
        assert_eq!(session.snapshot().seconds_remaining, 59);
    }

    #[test]
    fn active_json_omits_target() {
        let session = Session::with_target(GameConfig::default(), 57);
        let json = serde_json::to_string(&session.snapshot()).unwrap();

        assert!(!json.contains("target"));
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.target, None);
        assert_eq!(back.id, session.id());
    }

    #[test]
    fn elapsed_ms_matches_finished_session() {
        let mut session = Session::with_target(GameConfig::default(), 57);
        std::thread::sleep(std::time::Duration::from_millis(5));
        session.make_guess(57);

        let snapshot = session.snapshot();
        assert_eq!(u128::from(snapshot.elapsed_ms), session.elapsed().as_millis());
        assert!(snapshot.elapsed_ms >= 5);
    }
}
