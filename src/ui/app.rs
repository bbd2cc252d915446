use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};
use crate::game::{GameState, GameStatus};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let game_state = GameState::new(config)?;
        Ok(App {
            selected_column: config.cols / 2, // Start in middle
            game_state,
            should_quit: false,
            message: None,
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let cols = self.game_state.board().cols();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < cols {
                    self.selected_column = col;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('p') | KeyCode::Char('r') => {
                self.play_again();
            }
            _ => {}
        }
    }

    fn play_again(&mut self) {
        match self.game_state.rematch() {
            Ok(state) => {
                self.selected_column = state.board().cols() / 2;
                self.game_state = state;
                self.message = Some("Playing again...".to_string());
            }
            Err(e) => {
                self.message = Some(format!("Cannot start a new game: {e}"));
            }
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.apply_move(self.selected_column) {
            Ok(_) => {
                // Check if game just ended
                self.message = match self.game_state.status() {
                    GameStatus::Win(player) => Some(format!("{} wins!", player.name())),
                    GameStatus::Draw => Some("This game was a draw!".to_string()),
                    GameStatus::InProgress => None,
                };
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column full! Select another column".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'p' to play again.".to_string());
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}
