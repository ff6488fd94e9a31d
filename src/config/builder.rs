//! Builder for game configs.

use crate::config::error::{ConfigError, ConfigViolation};
use crate::config::GameConfig;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for [`GameConfig`] with a fluent API.
///
/// Starts from the defaults; `build` checks every rule and reports all
/// violations at once.
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    /// Start from an existing config instead of the defaults.
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    /// Set the inclusive range the target is drawn from.
    pub fn range(mut self, min: i32, max: i32) -> Self {
        self.config.min = min;
        self.config.max = max;
        self
    }

    pub fn max_attempts(mut self, n: u32) -> Self {
        self.config.max_attempts = n;
        self
    }

    pub fn time_limit_secs(mut self, secs: u32) -> Self {
        self.config.time_limit_secs = secs;
        self
    }

    /// Wall-clock time between countdown ticks.
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.config.tick_interval = interval;
        self
    }

    /// Build the config, accumulating ALL violations.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        match validate(&self.config) {
            Validation::Success(_) => Ok(self.config),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check(ok: bool, violation: ConfigViolation) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

/// Run every rule against `config`.
fn validate(config: &GameConfig) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let checks = vec![
        check(
            config.min <= config.max,
            ConfigViolation::EmptyRange {
                min: config.min,
                max: config.max,
            },
        ),
        check(config.max_attempts > 0, ConfigViolation::NoAttempts),
        check(config.time_limit_secs > 0, ConfigViolation::NoTimeLimit),
        check(
            !config.tick_interval.is_zero(),
            ConfigViolation::ZeroTickInterval,
        ),
    ];

    Validation::all_vec(checks).map(|_| ())
}
