use std::sync::{Arc, Mutex};

use super::{GameState, Placement};
use crate::error::MoveError;

/// A game that several threads can drive. Every move runs under one lock, so turns
/// stay strictly sequential.
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGame {
    pub fn new(state: GameState) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn apply_move(&self, col: usize) -> Result<Placement, MoveError> {
        let mut state = self.inner.lock().map_err(|_| MoveError::Poisoned)?;
        state.apply_move(col)
    }

    /// Copy of the current state for rendering or inspection
    pub fn snapshot(&self) -> Result<GameState, MoveError> {
        let state = self.inner.lock().map_err(|_| MoveError::Poisoned)?;
        Ok(state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{GameStatus, PlayerMark};
    use std::thread;

    #[test]
    fn test_concurrent_moves_are_serialized() {
        let game = SharedGame::new(GameState::new(&GameConfig::default()).unwrap());

        // two threads each drop three pieces into their own column
        let handles: Vec<_> = [0usize, 6]
            .into_iter()
            .map(|col| {
                let game = game.clone();
                thread::spawn(move || {
                    for _ in 0..3 {
                        game.apply_move(col).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let state = game.snapshot().unwrap();
        assert_eq!(state.move_count(), 6);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_player(), PlayerMark::PlayerOne);
        assert_eq!(state.board().column_height(0), Ok(3));
        assert_eq!(state.board().column_height(6), Ok(3));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let game = SharedGame::new(GameState::new(&GameConfig::default()).unwrap());
        let before = game.snapshot().unwrap();
        game.apply_move(3).unwrap();
        assert_eq!(before.move_count(), 0);
        assert_eq!(game.snapshot().unwrap().move_count(), 1);
    }
}
