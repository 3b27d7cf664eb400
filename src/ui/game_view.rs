use crate::game::{GameOutcome, GameState, Player};
use crate::score::ScoreBoard;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::GameMode;
use super::board_widget;

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: usize,
    mode: GameMode,
    scores: &ScoreBoard,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Scores
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, mode, chunks[0]);

    let win_line = match game_state.outcome() {
        Some(GameOutcome::Winner(_, line)) => Some(line),
        _ => None,
    };
    let cursor = if game_state.is_terminal() {
        None
    } else {
        Some(cursor)
    };
    board_widget::render_board(frame, game_state.board(), cursor, win_line, chunks[1]);

    render_scores(frame, scores, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    mode: GameMode,
    area: ratatui::layout::Rect,
) {
    let current_player = game_state.current_player();
    let color = player_color(current_player);

    let status = if game_state.is_terminal() {
        format!("Game Over  |  {}", mode.label())
    } else {
        format!(
            "Current Player: {}  |  {}",
            current_player.name(),
            mode.label()
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe"));

    frame.render_widget(header, area);
}

fn render_scores(frame: &mut Frame, scores: &ScoreBoard, area: ratatui::layout::Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!("X: {}", scores.x_wins),
            Style::default().fg(player_color(Player::X)),
        ),
        Span::raw("   "),
        Span::styled(
            format!("O: {}", scores.o_wins),
            Style::default().fg(player_color(Player::O)),
        ),
        Span::raw("   "),
        Span::raw(format!("Draws: {}", scores.draws)),
    ]);

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Scores"));

    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from(
        "←↑↓→: Move  |  Enter: Place  |  R: New Game  |  M: Mode  |  C: Clear Scores  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Red,
        Player::O => Color::Yellow,
    }
}
