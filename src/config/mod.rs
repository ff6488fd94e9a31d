//! Game configuration.
//!
//! The constants of a game (target range, attempts, time limit, tick
//! interval) live in [`GameConfig`]. Configs are built through
//! [`GameConfigBuilder`], which validates every rule and reports all
//! violations together, or loaded from a TOML file whose keys are all
//! optional.
//!
//! # Example
//!
//! ```rust
//! use numguess::config::GameConfig;
//!
//! let config = GameConfig::from_toml_str("max_attempts = 5\ntime_limit_secs = 30").unwrap();
//! assert_eq!(config.max_attempts(), 5);
//! assert_eq!(config.max(), 100);
//! ```

pub mod builder;
pub mod error;

pub use builder::GameConfigBuilder;
pub use error::{ConfigError, ConfigViolation};

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_MIN: i32 = 0;
pub const DEFAULT_MAX: i32 = 100;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 60;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Rules of one game.
///
/// Fields are private: a config comes from [`Default`], the builder or a
/// TOML file, so every instance has passed validation.
///
/// ```compile_fail
/// use numguess::config::GameConfig;
///
/// let config = GameConfig { min: 10, max: 0, ..GameConfig::default() };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub(crate) min: i32,
    pub(crate) max: i32,
    pub(crate) max_attempts: u32,
    pub(crate) time_limit_secs: u32,
    pub(crate) tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    /// Smallest possible target (inclusive).
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Largest possible target (inclusive).
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Wrong guesses allowed before the game is lost.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Countdown length in ticks.
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    /// Wall-clock time per tick.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Whether `value` lies in the target range.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(s)?;
        file.into_builder().build()
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }
}

/// On-disk shape of a config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    min: Option<i32>,
    max: Option<i32>,
    max_attempts: Option<u32>,
    time_limit_secs: Option<u32>,
    tick_interval_ms: Option<u64>,
}

impl ConfigFile {
    fn into_builder(self) -> GameConfigBuilder {
        let mut builder = GameConfigBuilder::new().range(
            self.min.unwrap_or(DEFAULT_MIN),
            self.max.unwrap_or(DEFAULT_MAX),
        );
        if let Some(n) = self.max_attempts {
            builder = builder.max_attempts(n);
        }
        if let Some(secs) = self.time_limit_secs {
            builder = builder.time_limit_secs(secs);
        }
        if let Some(ms) = self.tick_interval_ms {
            builder = builder.tick_interval(Duration::from_millis(ms));
        }
        builder
    }
}
