//! Core game logic: variable-size board with derived adjacency, four-in-a-row
//! detection, and the turn state machine.

mod board;
mod direction;
mod player;
mod shared;
mod state;
pub mod win;

pub use board::{Board, MoveOutcome, Slot, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};
pub use direction::Direction;
pub use player::PlayerMark;
pub use shared::SharedGame;
pub use state::{GameState, GameStatus, Placement};
