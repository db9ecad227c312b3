//! Board rendering and cell geometry.

use noughts::{view, Player, Position, Square};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
/// 3 cells plus 2 one-column separators.
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// 3 cell bands plus 2 one-row separators.
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Computes the nine cell rects, in board order, for the given
/// board chunk. Shared by rendering and mouse hit-testing.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board = super::center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let mut rects = [Rect::default(); 9];
    for (index, rect) in rects.iter_mut().enumerate() {
        let (row, col) = (index as u16 / 3, index as u16 % 3);
        // Clamp to the board rect; cells must stay inside the frame.
        *rect = Rect::new(
            board.x + col * (CELL_WIDTH + 1),
            board.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board);
    }
    rects
}

/// Finds the cell under a terminal coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    Position::ALL
        .iter()
        .zip(cell_rects(area))
        .find(|(_, rect)| super::hit(*rect, column, row))
        .map(|(pos, _)| *pos)
}

/// Renders the board: grid lines, then the nine cells.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    render_grid(f, super::center_rect(area, BOARD_WIDTH, BOARD_HEIGHT));

    for (pos, rect) in Position::ALL.iter().zip(cell_rects(area)) {
        render_cell(f, rect, app, *pos);
    }
}

fn render_grid(f: &mut Frame, board: Rect) {
    let line_style = Style::default().fg(Color::DarkGray);

    let rule = format!(
        "{sect}┼{sect}┼{sect}",
        sect = "─".repeat(CELL_WIDTH as usize)
    );
    for row in 1..3 {
        let y = board.y + row * (CELL_HEIGHT + 1) - 1;
        let rect = Rect::new(board.x, y, board.width, 1).intersection(board);
        f.render_widget(Paragraph::new(rule.clone()).style(line_style), rect);
    }

    for col in 1..3 {
        let x = board.x + col * (CELL_WIDTH + 1) - 1;
        for band in 0..3 {
            let y = board.y + band * (CELL_HEIGHT + 1);
            let rect = Rect::new(x, y, 1, CELL_HEIGHT).intersection(board);
            f.render_widget(Paragraph::new("│\n│\n│").style(line_style), rect);
        }
    }
}

fn render_cell(f: &mut Frame, rect: Rect, app: &App, pos: Position) {
    let game = app.session().game();

    let (text, style) = match game.board().get(pos) {
        Square::Empty => {
            if view::is_disabled(game, pos) {
                // Round over: frozen empty cells show nothing.
                (String::new(), Style::default())
            } else {
                (
                    (pos.to_index() + 1).to_string(),
                    Style::default().fg(Color::DarkGray),
                )
            }
        }
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if view::is_winning_cell(game, pos) {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        style
    };
    let style = if pos == app.cursor() {
        style.bg(Color::DarkGray)
    } else {
        style
    };

    // Leading blank line centers the mark in the 3-row cell.
    let text = Text::from(vec![Line::default(), Line::from(text)]);
    let cell = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(cell, rect);
}
