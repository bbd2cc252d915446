use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gravity_four::config::{BoardColor, GameConfig, PlayerOneColor, PlayerTwoColor};
use gravity_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "gravity-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gravity-four.toml")]
    config: PathBuf,

    /// Override number of rows (4 to 13)
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of columns (4 to 14)
    #[arg(long)]
    cols: Option<usize>,

    /// Override player one's color
    #[arg(long, value_enum)]
    player_one: Option<PlayerOneColor>,

    /// Override player two's color
    #[arg(long, value_enum)]
    player_two: Option<PlayerTwoColor>,

    /// Override the board color
    #[arg(long, value_enum)]
    board: Option<BoardColor>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Load configuration
    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.cols = cols;
    }
    if let Some(color) = cli.player_one {
        config.theme.player_one = color;
    }
    if let Some(color) = cli.player_two {
        config.theme.player_two = color;
    }
    if let Some(color) = cli.board {
        config.theme.board = color;
    }
    config.validate().context("invalid game configuration")?;

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut app = App::new(&config)?;
    run(&mut app).context("running terminal UI")?;
    Ok(())
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
