use crate::game::{Board, Cell, WinLine};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the 3x3 board into the given area.
///
/// The cursor cell is highlighted, and once the game is won the winning
/// line is drawn in green.
pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    cursor: Option<usize>,
    win_line: Option<WinLine>,
    area: Rect,
) {
    let mut lines = Vec::new();

    for row in 0..3 {
        let mut spans = Vec::new();
        for col in 0..3 {
            let idx = row * 3 + col;
            spans.push(cell_span(board.get(idx), idx, cursor, win_line));
            if col < 2 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));

        if row < 2 {
            lines.push(Line::from(Span::styled(
                "───┼───┼───",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn cell_span(
    cell: Cell,
    idx: usize,
    cursor: Option<usize>,
    win_line: Option<WinLine>,
) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::X => (" X ", Color::Red),
        Cell::O => (" O ", Color::Yellow),
    };

    let mut style = Style::default().fg(color);
    if win_line.is_some_and(|line| line.contains(&idx)) {
        style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    } else if cursor == Some(idx) {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }

    Span::styled(symbol, style)
}
