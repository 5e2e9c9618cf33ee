//! Configuration file loading for the terminal front-end.
//!
//! Settings come from an optional TOML file; command-line flags are applied
//! on top with [`CliConfig::apply_flags`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// The file is not valid TOML for [`CliConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How the board is drawn.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Draw pieces as chess glyphs instead of letters.
    #[serde(default)]
    pub unicode: bool,
    /// Draw Black's side at the bottom.
    #[serde(default)]
    pub flip: bool,
    /// Print file letters and rank numbers around the board.
    #[serde(default = "default_show_coordinates")]
    pub show_coordinates: bool,
}

fn default_show_coordinates() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unicode: false,
            flip: false,
            show_coordinates: default_show_coordinates(),
        }
    }
}

/// Gameplay options.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayConfig {
    /// Promote to a queen without asking.
    #[serde(default)]
    pub auto_queen: bool,
}

/// Complete front-end configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub play: PlayConfig,
}

impl CliConfig {
    /// Default location of the configuration file.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess-cli.toml")
    }

    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Turns on every option whose flag was given. Flags can only enable.
    pub fn apply_flags(mut self, unicode: bool, flip: bool, auto_queen: bool) -> Self {
        self.display.unicode |= unicode;
        self.display.flip |= flip;
        self.play.auto_queen |= auto_queen;
        self
    }
}
