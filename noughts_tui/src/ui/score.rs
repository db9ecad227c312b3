//! Score panel rendering.

use noughts::Scoreboard;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the three score panels: X, draws, O.
pub fn render_score(f: &mut Frame, area: Rect, scoreboard: &Scoreboard) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_panel(f, cols[0], "PLAYER X", *scoreboard.x(), Color::Cyan);
    render_panel(f, cols[1], "DRAWS", *scoreboard.draws(), Color::Yellow);
    render_panel(f, cols[2], "PLAYER O", *scoreboard.o(), Color::Red);
}

fn render_panel(f: &mut Frame, area: Rect, label: &str, value: u32, color: Color) {
    let lines = vec![
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(value.to_string()),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(panel, area);
}
