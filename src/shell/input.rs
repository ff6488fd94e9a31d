//! Parsing and validating player input.
//!
//! Nothing that fails here reaches the session.

use crate::config::GameConfig;
use thiserror::Error;

/// Rejected player input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i32, max: i32 },
}

/// What a line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Guess(i32),
    Reset,
    Quit,
}

/// Parse a guess and check it against the configured range.
pub fn parse_guess(raw: &str, config: &GameConfig) -> Result<i32, InputError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })?;

    i32::try_from(value)
        .ok()
        .filter(|v| config.contains(*v))
        .ok_or(InputError::OutOfRange {
            value,
            min: config.min(),
            max: config.max(),
        })
}

/// Parse one line: a guess, `r`/`reset`, or `q`/`quit`.
pub fn parse_command(raw: &str, config: &GameConfig) -> Result<ShellCommand, InputError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(ShellCommand::Quit),
        "r" | "reset" => Ok(ShellCommand::Reset),
        _ => parse_guess(raw, config).map(ShellCommand::Guess),
    }
}

/// The notice shown for any rejected guess.
pub fn invalid_guess_notice(config: &GameConfig) -> String {
    format!(
        "Enter a valid number between {} and {}",
        config.min(), config.max()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_bounds() {
        let config = GameConfig::default();
        assert_eq!(parse_guess("0", &config), Ok(0));
        assert_eq!(parse_guess("100", &config), Ok(100));
        assert_eq!(parse_guess("  57 \n", &config), Ok(57));
    }

    #[test]
    fn rejects_non_numbers() {
        let config = GameConfig::default();
        assert_eq!(
            parse_guess("fifty", &config),
            Err(InputError::NotANumber {
                input: "fifty".to_string()
            })
        );
        assert!(matches!(
            parse_guess("", &config),
            Err(InputError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_guess("4.5", &config),
            Err(InputError::NotANumber { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range() {
        let config = GameConfig::default();
        assert_eq!(
            parse_guess("101", &config),
            Err(InputError::OutOfRange {
                value: 101,
                min: 0,
                max: 100
            })
        );
        assert!(matches!(
            parse_guess("-1", &config),
            Err(InputError::OutOfRange { value: -1, .. })
        ));
        assert!(matches!(
            parse_guess("99999999999", &config),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn respects_custom_range() {
        let config = GameConfig::builder().range(10, 20).build().unwrap();
        assert_eq!(parse_guess("15", &config), Ok(15));
        assert!(parse_guess("5", &config).is_err());
    }

    #[test]
    fn parses_commands() {
        let config = GameConfig::default();
        assert_eq!(parse_command("q", &config), Ok(ShellCommand::Quit));
        assert_eq!(parse_command("QUIT", &config), Ok(ShellCommand::Quit));
        assert_eq!(parse_command(" r ", &config), Ok(ShellCommand::Reset));
        assert_eq!(parse_command("reset", &config), Ok(ShellCommand::Reset));
        assert_eq!(parse_command("42", &config), Ok(ShellCommand::Guess(42)));
        assert!(parse_command("maybe", &config).is_err());
    }

    #[test]
    fn notice_names_the_range() {
        assert_eq!(
            invalid_guess_notice(&GameConfig::default()),
            "Enter a valid number between 0 and 100"
        );
    }
}
