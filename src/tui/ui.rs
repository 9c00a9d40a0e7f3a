//! Stateless UI rendering and mouse hit-testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Cell, Coordinate, Mark, SIZE, rules};

use super::app::App;

/// Width of one cell in terminal columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;

const HELP_TEXT: &str = "Click a cell or 1-9 | Arrows + Enter | R: Restart | Q: Quit";

/// Screen rectangles of the rendered board.
///
/// Kept by the app after each frame so mouse clicks can be mapped back to
/// the cell under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    cells: [[Rect; SIZE]; SIZE],
    row_separators: [Rect; SIZE - 1],
    col_separators: [[Rect; SIZE - 1]; SIZE],
}

impl BoardLayout {
    /// Lays out the board centered in `area`.
    pub fn new(area: Rect) -> Self {
        let board_area = center_rect(
            area,
            CELL_WIDTH * SIZE as u16 + 2,
            CELL_HEIGHT * SIZE as u16 + 2,
        );
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board_area);

        let mut cells = [[Rect::default(); SIZE]; SIZE];
        let mut col_separators = [[Rect::default(); SIZE - 1]; SIZE];
        for row in 0..SIZE {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(rows[row * 2]);
            cells[row] = [cols[0], cols[2], cols[4]];
            col_separators[row] = [cols[1], cols[3]];
        }

        Self {
            cells,
            row_separators: [rows[1], rows[3]],
            col_separators,
        }
    }

    /// Rectangle covered by a cell.
    pub fn cell_rect(&self, coord: Coordinate) -> Rect {
        self.cells[coord.row()][coord.col()]
    }

    /// Returns the cell under terminal position `(column, row)`, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coordinate> {
        Coordinate::ALL
            .into_iter()
            .find(|&coord| contains(self.cell_rect(coord), column, row))
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Draws the whole screen and returns where the board landed.
pub fn draw(frame: &mut Frame, app: &App) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let layout = BoardLayout::new(chunks[1]);
    draw_board(frame, &layout, app);

    let status_style = if app.game().is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    layout
}

fn draw_board(frame: &mut Frame, layout: &BoardLayout, app: &App) {
    let winning = rules::winning_line(app.game().board()).map(|(_, line)| line);

    for coord in Coordinate::ALL {
        let highlight = winning.is_some_and(|line| line.contains(&coord));
        draw_cell(frame, layout.cell_rect(coord), app, coord, highlight);
    }

    for area in layout.row_separators {
        let sep = Paragraph::new("─".repeat(area.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
    for area in layout.col_separators.iter().flatten() {
        let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, *area);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coordinate, winning: bool) {
    let (symbol, style) = match app.game().board().get(coord) {
        Cell::Empty => (
            (coord.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(mark) => (
            app.glyph(mark).to_string(),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        ),
    };

    let background = if winning {
        Style::default().bg(Color::Green)
    } else if coord == app.cursor() && !app.game().is_over() {
        Style::default().bg(Color::White)
    } else {
        Style::default()
    };

    let lines = vec![Line::default(), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(lines)
        .style(background)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
