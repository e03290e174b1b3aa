//! Game settings, read from a TOML file and overridden by command-line flags.
//!
//! ```toml
//! width = 5
//! height = 4
//! start_squares = 2
//! seed = 1234      # omit for a fresh random seed each game
//! ```

use std::io::Read;
use std::path::Path;

/// Widest or tallest board accepted; a 32-cell row renders in 223 columns.
pub const MAX_SIDE: usize = 32;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    #[serde(default = "defaults::width")]
    pub width: usize,
    #[serde(default = "defaults::height")]
    pub height: usize,
    /// Random tiles placed when a game starts.
    #[serde(default = "defaults::start_squares")]
    pub start_squares: usize,
    /// Seed for the first game. `None` draws a fresh one.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: defaults::width(),
            height: defaults::height(),
            start_squares: defaults::start_squares(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = std::fs::File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject boards with no cells, sides above [`MAX_SIDE`], or more
    /// starting tiles than cells.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!("board must be at least 1x1, got {}x{}", self.width, self.height)));
        }
        if self.width > MAX_SIDE || self.height > MAX_SIDE {
            return Err(ConfigError::Invalid(format!(
                "board sides are capped at {MAX_SIDE}, got {}x{}",
                self.width, self.height
            )));
        }
        let cells = self
            .width
            .checked_mul(self.height)
            .ok_or_else(|| ConfigError::Invalid(format!("{}x{} board is too large", self.width, self.height)))?;
        if self.start_squares > cells {
            return Err(ConfigError::Invalid(format!(
                "{} starting tiles do not fit on a {}x{} board",
                self.start_squares, self.width, self.height
            )));
        }
        Ok(())
    }
}

mod defaults {
    pub fn width() -> usize { 4 }
    pub fn height() -> usize { 4 }
    pub fn start_squares() -> usize { 2 }
}
