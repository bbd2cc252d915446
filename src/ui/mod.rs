//! Terminal UI: a ratatui view of the board with keyboard column selection.

mod app;
pub mod game_view;

pub use app::App;
