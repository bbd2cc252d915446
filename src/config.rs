use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};

/// Colors player one may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerOneColor {
    #[default]
    Red,
    Magenta,
}

/// Colors player two may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerTwoColor {
    #[default]
    Yellow,
    Cyan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BoardColor {
    Blue,
    #[default]
    Black,
}

/// Display attributes. The engine never looks at these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub player_one: PlayerOneColor,
    pub player_two: PlayerTwoColor,
    pub board: BoardColor,
}

/// Game setup, loadable from TOML. The default is the classic 6x7 board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub theme: Theme,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 6,
            cols: 7,
            theme: Theme::default(),
        }
    }
}

impl GameConfig {
    /// Custom board size and colors, validated
    pub fn custom(rows: usize, cols: usize, theme: Theme) -> Result<Self, ConfigError> {
        let config = GameConfig { rows, cols, theme };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.rows) {
            return Err(ConfigError::Rows(self.rows));
        }
        if !(MIN_COLS..=MAX_COLS).contains(&self.cols) {
            return Err(ConfigError::Cols(self.cols));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
