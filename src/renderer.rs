use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::{
    GLYPH_BORDER_CORNER, GLYPH_BORDER_HORIZONTAL, GLYPH_BORDER_VERTICAL, GridSize,
};
use crate::game::{GameState, GameStatus, Outcome};
use crate::grid::{Cell, Grid};
use crate::snake::Position;

const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);
const BONUS_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const SCORE_STYLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);
const TIMER_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Message shown over the board when the snake fills it.
pub const WIN_MESSAGE: &str = "You Won!";

/// Message shown over the board for every other ending.
pub const LOSS_MESSAGE: &str = "Game Over!";

/// Renders the full game frame from immutable state.
///
/// The frame is the bordered grid anchored at the top-left corner, a blank
/// line, the score, and the bonus countdown while a bonus is active. Ratatui
/// repaints the whole frame, so lines that vanish (the timer) leave nothing
/// behind.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let area = frame.area();

    let mut lines = board_lines(state.grid());
    lines.push(Line::default());
    lines.extend(hud_lines(state.score, state.bonus_timer()));
    frame.render_widget(Paragraph::new(lines), area);

    if let GameStatus::Ended(outcome) = state.status {
        render_end_message(frame, area, state.bounds(), outcome);
    }
}

/// Returns the message for a finished round.
#[must_use]
pub fn end_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => WIN_MESSAGE,
        Outcome::Lost => LOSS_MESSAGE,
    }
}

fn board_lines(grid: &Grid) -> Vec<Line<'static>> {
    let border = border_line(grid.size());
    let mut lines = Vec::with_capacity(usize::from(grid.size().height) + 2);

    lines.push(Line::raw(border.clone()));
    for y in 0..i32::from(grid.size().height) {
        let mut spans = Vec::with_capacity(usize::from(grid.size().width) + 2);
        spans.push(Span::raw(GLYPH_BORDER_VERTICAL));
        for x in 0..i32::from(grid.size().width) {
            let cell = grid.get(Position { x, y }).unwrap_or(Cell::Empty);
            spans.push(Span::styled(cell.glyph().to_string(), cell_style(cell)));
        }
        spans.push(Span::raw(GLYPH_BORDER_VERTICAL));
        lines.push(Line::from(spans));
    }
    lines.push(Line::raw(border));

    lines
}

fn border_line(size: GridSize) -> String {
    let mut border = String::from(GLYPH_BORDER_CORNER);
    border.push_str(&GLYPH_BORDER_HORIZONTAL.repeat(usize::from(size.width)));
    border.push_str(GLYPH_BORDER_CORNER);
    border
}

fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Body | Cell::Head(_) => SNAKE_STYLE,
        Cell::Food => FOOD_STYLE,
        Cell::Bonus => BONUS_STYLE,
        Cell::Empty => Style::new(),
    }
}

fn hud_lines(score: u32, timer: Option<u16>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::raw("Score: "),
        Span::styled(score.to_string(), SCORE_STYLE),
    ])];

    if let Some(ticks) = timer {
        lines.push(Line::from(vec![
            Span::raw("Timer: "),
            Span::styled(ticks.to_string(), TIMER_STYLE),
        ]));
    }

    lines
}

fn render_end_message(frame: &mut Frame<'_>, area: Rect, bounds: GridSize, outcome: Outcome) {
    let message = end_message(outcome);
    let width = u16::try_from(message.width()).unwrap_or(u16::MAX);

    // +1 skips the border column/row.
    let x = 1 + bounds.width.saturating_sub(width) / 2;
    let y = 1 + bounds.height / 2;
    let target = Rect::new(area.x.saturating_add(x), area.y.saturating_add(y), width, 1)
        .intersection(area);
    if target.is_empty() {
        return;
    }

    frame.render_widget(Paragraph::new(Span::styled(message, MESSAGE_STYLE)), target);
}
