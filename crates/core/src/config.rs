//! Game configuration: board dimensions and win threshold.

use crate::error::ConfigError;
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_WIN_VALUE, MAX_WIN_VALUE, MIN_SIDE};

/// Environment variable for the number of rows.
pub const ENV_HEIGHT: &str = "TUI_2048_HEIGHT";
/// Environment variable for the number of columns.
pub const ENV_WIDTH: &str = "TUI_2048_WIDTH";
/// Environment variable for the winning tile value.
pub const ENV_WIN: &str = "TUI_2048_WIN";

/// Construction-time configuration for a [`crate::GameField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub win_value: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            win_value: DEFAULT_WIN_VALUE,
        }
    }
}

impl GameConfig {
    pub fn new(height: usize, width: usize, win_value: u32) -> Self {
        Self {
            height,
            width,
            win_value,
        }
    }

    /// Create from environment variables.
    ///
    /// Unset (or blank) variables fall back to the classic 4x4 / 2048 defaults.
    /// A set but unparsable value is an error rather than a silent default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`GameConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            height: parse_var(&lookup, ENV_HEIGHT)?.unwrap_or(defaults.height),
            width: parse_var(&lookup, ENV_WIDTH)?.unwrap_or(defaults.width),
            win_value: parse_var(&lookup, ENV_WIN)?.unwrap_or(defaults.win_value),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the construction contract: both sides at least 2, win value in `1..=MAX_WIN_VALUE`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height < MIN_SIDE || self.width < MIN_SIDE {
            return Err(ConfigError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        if self.win_value == 0 || self.win_value > MAX_WIN_VALUE {
            return Err(ConfigError::InvalidWinValue(self.win_value));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv {
            var,
            value: raw.clone(),
        })
}
