//! `numguess` binary: play the game in a terminal.
//!
//! Logs go to stderr so the game screen on stdout stays readable. Set
//! `RUST_LOG=numguess=debug` to see every guess and timer event.

use anyhow::{Context, Result};
use clap::Parser;
use numguess::config::{GameConfig, GameConfigBuilder};
use numguess::driver::GameDriver;
use numguess::shell::{OutputFormat, Shell};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "numguess")]
#[command(version)]
#[command(about = "Guess the number before the time or your attempts run out")]
struct Cli {
    /// TOML file with game rules (min, max, max_attempts, time_limit_secs, tick_interval_ms)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the target number, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Countdown length in seconds
    #[arg(long, value_name = "SECS")]
    time_limit: Option<u32>,

    /// Wrong guesses allowed
    #[arg(long, value_name = "N")]
    attempts: Option<u32>,

    /// Print each snapshot as a JSON line instead of text screens
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let base = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        let mut builder = GameConfigBuilder::from_config(base);
        if let Some(secs) = self.time_limit {
            builder = builder.time_limit_secs(secs);
        }
        if let Some(n) = self.attempts {
            builder = builder.max_attempts(n);
        }
        Ok(builder.build()?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "numguess=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    tracing::info!(
        min = config.min(),
        max = config.max(),
        max_attempts = config.max_attempts(),
        time_limit_secs = config.time_limit_secs(),
        "starting game"
    );

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let handle = GameDriver::spawn(config.clone(), rng);
    let shell = Shell::new(handle, config, tokio::io::stdout(), format);
    shell.run(BufReader::new(tokio::io::stdin())).await?;

    tracing::info!("bye");
    Ok(())
}
