use std::path::PathBuf;

use crate::game::{MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};

/// Errors that can occur when building a game configuration or a board.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("rows must be between {min} and {max} (got {0})", min = MIN_ROWS, max = MAX_ROWS)]
    Rows(usize),

    #[error("columns must be between {min} and {max} (got {0})", min = MIN_COLS, max = MAX_COLS)]
    Cols(usize),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Errors raised by coordinate-based board queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Errors returned when a move cannot be applied. The game state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {col} is outside the board (columns 0..{cols})")]
    OutOfBounds { col: usize, cols: usize },

    #[error("the game is over")]
    GameOver,

    #[error("game lock was poisoned")]
    Poisoned,
}
