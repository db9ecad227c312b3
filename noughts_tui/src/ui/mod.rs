//! UI rendering using ratatui.

pub mod board;
mod score;

use noughts::view::{self, Tone};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Screen regions, top to bottom.
///
/// Computed by [`layout`] from the full frame area; the same
/// function feeds both rendering and mouse hit-testing, so clicks
/// always land on what is drawn.
pub struct ScreenChunks {
    /// Title and status line.
    pub header: Rect,
    /// The 3x3 board.
    pub board: Rect,
    /// Score panels.
    pub score: Rect,
    /// New Game button.
    pub button: Rect,
    /// Key help line.
    pub help: Rect,
}

/// Splits the frame area into screen regions.
pub fn layout(area: Rect) -> ScreenChunks {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(11),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenChunks {
        header: chunks[0],
        board: chunks[1],
        score: chunks[2],
        button: chunks[3],
        help: chunks[4],
    }
}

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = layout(f.area());

    render_header(f, chunks.header, app);
    board::render_board(f, chunks.board, app);
    score::render_score(f, chunks.score, app.session().scoreboard());
    render_button(f, chunks.button);
    render_help(f, chunks.help);
}

/// The New Game button, centered in its chunk.
pub fn button_rect(chunk: Rect) -> Rect {
    center_rect(chunk, 14, 3)
}

/// Whether a terminal coordinate falls inside a rect.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

/// Centers a `width` x `height` rect inside `area`, clamping to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::X => Color::Cyan,
        Tone::O => Color::Red,
        Tone::Draw => Color::Yellow,
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let status = view::status(app.session().game());

    let lines = vec![
        Line::from(Span::styled(
            "Tic-Tac-Toe",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            status.text().clone(),
            Style::default()
                .fg(tone_color(*status.tone()))
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_button(f: &mut Frame, chunk: Rect) {
    let button = Paragraph::new("New Game")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, button_rect(chunk));
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("1-9 or click: play | Arrows + Enter: play | N: New Game | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, area);
}
