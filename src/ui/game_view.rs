use crate::config::{BoardColor, PlayerOneColor, PlayerTwoColor, Theme};
use crate::game::{Board, GameState, GameStatus, PlayerMark, Slot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn player_color(theme: &Theme, player: PlayerMark) -> Color {
    match player {
        PlayerMark::PlayerOne => match theme.player_one {
            PlayerOneColor::Red => Color::Red,
            PlayerOneColor::Magenta => Color::Magenta,
        },
        PlayerMark::PlayerTwo => match theme.player_two {
            PlayerTwoColor::Yellow => Color::Yellow,
            PlayerTwoColor::Cyan => Color::Cyan,
        },
    }
}

fn board_color(theme: &Theme) -> Color {
    match theme.board {
        BoardColor::Blue => Color::Blue,
        BoardColor::Black => Color::Black,
    }
}

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) {
    let rows = game_state.board().rows() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),     // Header
            Constraint::Min(rows + 4), // Board
            Constraint::Length(3),     // Message
            Constraint::Length(3),     // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let theme = &game_state.config().theme;
    let (status, color) = match game_state.status() {
        GameStatus::InProgress => {
            let player = game_state.current_player();
            (
                format!("Current Player: {}", player.name()),
                player_color(theme, player),
            )
        }
        GameStatus::Win(player) => (
            format!("Game Over  |  {} wins!", player.name()),
            player_color(theme, player),
        ),
        GameStatus::Draw => ("Game Over  |  Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

/// Lines for the board, top row first, framed by the column selector.
pub fn board_lines(
    board: &Board,
    theme: &Theme,
    selected_column: usize,
    winning_line: &[(usize, usize)],
) -> Vec<Line<'static>> {
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let bar = "═".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  ╔{bar}╗")));

    let bg = board_color(theme);
    for row in (0..board.rows()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..cols {
            let slot = board.occupant(row, col).unwrap_or(Slot::Empty);
            let span = match slot {
                Slot::Empty => Span::styled(" ○ ", Style::default().fg(Color::White).bg(bg)),
                Slot::Occupied(player) => {
                    let mut style = Style::default().fg(player_color(theme, player)).bg(bg);
                    if winning_line.contains(&(row, col)) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::styled(" ", Style::default().bg(bg)));
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{bar}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let winning_line = game_state.winning_line().unwrap_or_default();
    let lines = board_lines(
        game_state.board(),
        &game_state.config().theme,
        selected_column,
        &winning_line,
    );

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→ or 1-9: Select  |  Enter: Drop  |  P: Play again  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
