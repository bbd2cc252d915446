use log::{debug, info};

use super::{win, Board, MoveOutcome, PlayerMark};
use crate::config::GameConfig;
use crate::error::{BoardError, ConfigError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win(PlayerMark),
    Draw,
}

/// A successful drop, and whether it ended the game with a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub win: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current_player: PlayerMark,
    status: GameStatus,
    last_move: Option<Placement>,
}

impl GameState {
    /// Create initial game state for the given configuration
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let board = Board::new(config.rows, config.cols)?;
        debug!("new {}x{} game", config.rows, config.cols);
        Ok(GameState {
            config: config.clone(),
            board,
            current_player: PlayerMark::PlayerOne, // Player 1 starts
            status: GameStatus::InProgress,
            last_move: None,
        })
    }

    /// Fresh game with the same configuration
    pub fn rematch(&self) -> Result<Self, ConfigError> {
        Self::new(&self.config)
    }

    /// Get current player
    pub fn current_player(&self) -> PlayerMark {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn last_move(&self) -> Option<Placement> {
        self.last_move
    }

    /// Pieces dropped so far
    pub fn move_count(&self) -> usize {
        self.board.occupied()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Coordinates of the connection that won the game, if any
    pub fn winning_line(&self) -> Option<Vec<(usize, usize)>> {
        let GameStatus::Win(mark) = self.status else {
            return None;
        };
        let last = self.last_move?;
        win::winning_line(&self.board, last.row, last.col, mark)
    }

    /// Drop the current player's piece in `col` and advance the game
    pub fn apply_move(&mut self, col: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            debug!("rejected move in column {col}: game is over");
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let outcome = self.board.place(col, player).map_err(|e| match e {
            BoardError::OutOfBounds { cols, .. } => MoveError::OutOfBounds { col, cols },
        })?;

        let MoveOutcome::Placed { row, col } = outcome else {
            debug!("rejected move in column {col}: column full");
            return Err(MoveError::ColumnFull(col));
        };
        debug!("{} dropped into ({row}, {col})", player.name());

        let placement = Placement {
            row,
            col,
            win: win::check(&self.board, row, col, player),
        };
        self.last_move = Some(placement);

        if placement.win {
            info!("{} wins after {} moves", player.name(), self.move_count());
            self.status = GameStatus::Win(player);
        } else if self.board.is_full() {
            info!("draw after {} moves", self.move_count());
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.other();
        }

        Ok(placement)
    }
}
