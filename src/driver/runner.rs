//! The driver task.

use super::handle::GameHandle;
use super::Command;
use crate::config::GameConfig;
use crate::core::{GuessOutcome, Session, TickOutcome};
use crate::snapshot::SessionSnapshot;
use rand::Rng;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

const COMMAND_BUFFER: usize = 16;

/// Single owner of a [`Session`], serializing ticks and commands.
pub struct GameDriver<R> {
    session: Session,
    rng: R,
    commands: mpsc::Receiver<Command>,
    snapshots: watch::Sender<SessionSnapshot>,
    timer: Option<Interval>,
}

impl<R: Rng + Send + 'static> GameDriver<R> {
    /// Create a driver and its handle without starting the task.
    ///
    /// The countdown and the session clock start when [`run`](Self::run) is
    /// first polled.
    pub fn new(config: GameConfig, mut rng: R) -> (GameHandle, Self) {
        let session = Session::new(config, &mut rng);
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot());

        let driver = Self {
            session,
            rng,
            commands: command_rx,
            snapshots: snapshot_tx,
            timer: None,
        };
        (GameHandle::new(command_tx, snapshot_rx), driver)
    }

    /// Spawn a driver on the current tokio runtime.
    pub fn spawn(config: GameConfig, rng: R) -> GameHandle {
        let (handle, driver) = Self::new(config, rng);
        tokio::spawn(driver.run());
        handle
    }

    /// Run until shutdown or until every handle is dropped.
    pub async fn run(mut self) {
        self.session.restart_clock();
        self.start_timer();
        info!(session = %self.session.id(), "session started");

        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::Guess(value)) => self.guess(value),
                    Some(Command::Reset) => self.reset(),
                    Some(Command::Shutdown) | None => break,
                },
                () = next_tick(&mut self.timer) => self.tick(),
            }
        }

        self.stop_timer();
        info!(session = %self.session.id(), "driver stopped");
    }

    fn guess(&mut self, value: i32) {
        let outcome = self.session.make_guess(value);
        debug!(session = %self.session.id(), value, ?outcome, "guess evaluated");

        match outcome {
            GuessOutcome::Ignored => return,
            GuessOutcome::Won | GuessOutcome::OutOfAttempts { .. } => self.game_over(),
            GuessOutcome::Hint { .. } => {}
        }
        self.publish();
    }

    fn tick(&mut self) {
        match self.session.on_tick() {
            TickOutcome::Ignored => return,
            TickOutcome::TimedOut => self.game_over(),
            TickOutcome::Counted { .. } => {}
        }
        self.publish();
    }

    fn reset(&mut self) {
        self.stop_timer();
        self.session.reset(&mut self.rng);
        self.start_timer();
        info!(session = %self.session.id(), "session reset");
        self.publish();
    }

    fn game_over(&mut self) {
        self.stop_timer();
        info!(
            session = %self.session.id(),
            phase = %self.session.phase(),
            guesses = self.session.guesses().len(),
            elapsed_ms = u64::try_from(self.session.elapsed().as_millis()).unwrap_or(u64::MAX),
            "game over"
        );
    }

    fn start_timer(&mut self) {
        self.timer = Some(countdown(self.session.config().tick_interval()));
    }

    fn stop_timer(&mut self) {
        if self.timer.take().is_some() {
            debug!(session = %self.session.id(), "timer stopped");
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.session.snapshot());
    }
}

/// Interval whose first tick fires one period from now.
fn countdown(period: Duration) -> Interval {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

async fn next_tick(timer: &mut Option<Interval>) {
    match timer {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;
    use crate::driver::DriverError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SEED: u64 = 9;

    fn seeded_target() -> i32 {
        StdRng::seed_from_u64(SEED).gen_range(0..=100)
    }

    fn spawn_default() -> GameHandle {
        GameDriver::spawn(GameConfig::default(), StdRng::seed_from_u64(SEED))
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_times_out_after_sixty_ticks() {
        let mut handle = spawn_default();
        let started = Instant::now();

        let snapshot = loop {
            let snapshot = handle.changed().await.unwrap();
            if snapshot.is_over {
                break snapshot;
            }
        };

        assert_eq!(snapshot.phase, Phase::TimedOut);
        assert_eq!(snapshot.seconds_remaining, 0);
        assert_eq!(snapshot.attempts_remaining, 3);
        assert_eq!(snapshot.target, Some(seeded_target()));
        assert!(started.elapsed() >= Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn each_tick_publishes_one_second_less() {
        let mut handle = spawn_default();

        assert_eq!(handle.changed().await.unwrap().seconds_remaining, 59);
        assert_eq!(handle.changed().await.unwrap().seconds_remaining, 58);
    }

    #[tokio::test(start_paused = true)]
    async fn correct_guess_wins_and_stops_timer() {
        let mut handle = spawn_default();
        let target = seeded_target();

        handle.guess(target).await.unwrap();
        let snapshot = loop {
            let snapshot = handle.changed().await.unwrap();
            if !snapshot.guesses.is_empty() {
                break snapshot;
            }
        };
        assert_eq!(snapshot.phase, Phase::Won);
        assert!(snapshot.is_over);

        let seconds = snapshot.seconds_remaining;
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(handle.snapshot().seconds_remaining, seconds);
        assert_eq!(handle.snapshot().phase, Phase::Won);
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_guesses_exhaust_attempts() {
        let mut handle = spawn_default();
        let wrong = if seeded_target() == 0 { 1 } else { 0 };

        for _ in 0..3 {
            handle.guess(wrong).await.unwrap();
        }
        let snapshot = loop {
            let snapshot = handle.changed().await.unwrap();
            if snapshot.is_over {
                break snapshot;
            }
        };

        assert_eq!(snapshot.phase, Phase::OutOfAttempts);
        assert_eq!(snapshot.attempts_remaining, 0);
        assert_eq!(snapshot.guesses, vec![wrong; 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn guesses_after_game_over_publish_nothing() {
        let mut handle = spawn_default();
        handle.guess(seeded_target()).await.unwrap();
        while !handle.changed().await.unwrap().is_over {}

        handle.guess(1).await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(!handle.subscribe().has_changed().unwrap());
        assert_eq!(handle.snapshot().guesses, vec![seeded_target()]);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_starts_fresh_session_and_timer() {
        let mut handle = spawn_default();
        handle.guess(seeded_target()).await.unwrap();
        let over = loop {
            let snapshot = handle.changed().await.unwrap();
            if snapshot.is_over {
                break snapshot;
            }
        };

        handle.reset().await.unwrap();
        let fresh = handle.changed().await.unwrap();
        assert_ne!(fresh.id, over.id);
        assert_eq!(fresh.phase, Phase::Active);
        assert!(!fresh.is_over);
        assert_eq!(fresh.attempts_remaining, 3);
        assert_eq!(fresh.seconds_remaining, 60);
        assert!(fresh.guesses.is_empty());

        assert_eq!(handle.changed().await.unwrap().seconds_remaining, 59);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_closes_handle() {
        let mut handle = spawn_default();
        handle.shutdown().await.unwrap();

        assert_eq!(handle.changed().await, Err(DriverError::Closed));
        assert_eq!(handle.guess(10).await, Err(DriverError::Closed));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_every_handle_stops_driver() {
        let handle = spawn_default();
        let mut snapshots = handle.subscribe();
        let clone = handle.clone();
        drop(handle);
        drop(clone);

        assert!(snapshots.changed().await.is_err());
        let seconds = snapshots.borrow().seconds_remaining;
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(snapshots.borrow().seconds_remaining, seconds);
        assert_eq!(seconds, 60);
    }

    #[tokio::test(start_paused = true)]
    async fn session_clock_starts_when_driver_runs() {
        let (mut handle, driver) =
            GameDriver::new(GameConfig::default(), StdRng::seed_from_u64(SEED));
        std::thread::sleep(Duration::from_millis(50));
        tokio::spawn(driver.run());

        handle.guess(seeded_target()).await.unwrap();
        let snapshot = loop {
            let snapshot = handle.changed().await.unwrap();
            if snapshot.is_over {
                break snapshot;
            }
        };
        assert_eq!(snapshot.phase, Phase::Won);
        assert!(snapshot.elapsed_ms < 50);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_tick_interval_drives_countdown() {
        let config = GameConfig::builder()
            .time_limit_secs(3)
            .tick_interval(Duration::from_millis(100))
            .build()
            .unwrap();
        let mut handle = GameDriver::spawn(config, StdRng::seed_from_u64(SEED));
        let started = Instant::now();

        while !handle.changed().await.unwrap().is_over {}

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(300));
        assert!(elapsed < Duration::from_secs(1));
        assert_eq!(handle.snapshot().phase, Phase::TimedOut);
    }
}
