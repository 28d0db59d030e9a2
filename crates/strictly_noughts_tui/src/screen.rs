//! Screen model and rendering for the board.

use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_noughts::{Mark, Notification, Outcome, Position, Square, WinPattern};
use tracing::{debug, instrument};

use crate::presenter::Presenter;

const PROMPT: &str = "Arrows/hjkl move - Enter/Space place - q quits";

/// Everything the board screen shows, rebuilt from notifications.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardScreen {
    cells: [Square; 9],
    highlight: Option<WinPattern>,
    cursor: Position,
    outcome: Option<Outcome>,
    player_score: u32,
    bot_score: u32,
    status: String,
}

impl BoardScreen {
    /// Creates an empty screen with the cursor at `cursor`.
    pub fn new(cursor: Position) -> Self {
        Self {
            cells: [Square::Empty; 9],
            highlight: None,
            cursor,
            outcome: None,
            player_score: 0,
            bot_score: 0,
            status: PROMPT.to_string(),
        }
    }

    /// Renders the screen into the provided [`Frame`].
    #[instrument(skip_all)]
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Score
                Constraint::Min(9),    // Board
                Constraint::Length(3), // Status
            ])
            .split(area);

        let title = Paragraph::new("Strictly Noughts")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let score = Paragraph::new(format!(
            "You (X) {}  :  {} Bot (O)",
            self.player_score, self.bot_score
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
        frame.render_widget(score, chunks[1]);

        self.render_board(frame, chunks[2]);

        let status_color = match self.outcome {
            Some(Outcome::PlayerWin) => Color::Green,
            Some(Outcome::BotWin) => Color::Red,
            Some(_) => Color::Magenta,
            None => Color::Yellow,
        };
        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[3]);
    }

    fn render_board(&self, frame: &mut Frame, area: Rect) {
        let board_area = center_rect(area, 40, 11);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(board_area);

        for (row, positions) in Position::ALL.chunks(3).enumerate() {
            self.render_row(frame, rows[row * 2], positions);
            if row < 2 {
                render_separator(frame, rows[row * 2 + 1]);
            }
        }
    }

    fn render_row(&self, frame: &mut Frame, area: Rect, positions: &[Position]) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(area);

        for (col, &pos) in positions.iter().enumerate() {
            self.render_cell(frame, cols[col * 2], pos);
            if col < 2 {
                render_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
    }

    fn render_cell(&self, frame: &mut Frame, area: Rect, pos: Position) {
        let (symbol, mut style) = match self.cells[pos.to_index()] {
            Square::Empty => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
            Square::Occupied(mark) => {
                let color = match mark {
                    Mark::Player => Color::Blue,
                    Mark::Bot => Color::Red,
                };
                (
                    format!(" {} ", mark.symbol()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            }
        };

        if self.highlight.is_some_and(|p| p.cells().contains(&pos)) {
            style = style.bg(Color::Green);
        }
        if pos == self.cursor {
            style = style.bg(Color::White).fg(Color::Black);
        }

        let paragraph =
            Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

impl Presenter for BoardScreen {
    fn present(&mut self, notification: &Notification) {
        debug!(?notification, "Updating screen");

        match *notification {
            Notification::CellMarked(pos, mark) => {
                self.cells[pos.to_index()] = Square::Occupied(mark);
            }
            Notification::PatternHighlighted(pattern) => self.highlight = Some(pattern),
            Notification::CursorMoved(pos) => self.cursor = pos,
            Notification::RoundConcluded(outcome) => {
                self.outcome = Some(outcome);
                self.status = format!("{outcome} Next round starting...");
            }
            Notification::BoardCleared => {
                self.cells = [Square::Empty; 9];
                self.highlight = None;
                self.outcome = None;
                self.status = PROMPT.to_string();
            }
            Notification::ScoreChanged(Mark::Player, score) => self.player_score = score,
            Notification::ScoreChanged(Mark::Bot, score) => self.bot_score = score,
            Notification::PlaySound(_)
            | Notification::StartResetTimer
            | Notification::StopResetTimer => {}
        }
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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
