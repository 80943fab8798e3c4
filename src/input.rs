use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(dx, dy)` step for one cell of movement.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Ends the round normally.
    Quit,
    /// Ctrl-C: abandon the process with a non-zero exit status.
    Interrupt,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Maps one key press to a game command.
///
/// Letters are matched in both cases. Arrow keys arrive already decoded by
/// crossterm, so the raw `ESC [ A..D` sequences of individual terminals never
/// reach this function.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(GameInput::Interrupt),
            _ => None,
        };
    }

    let input = match key.code {
        KeyCode::Char('q' | 'Q') => GameInput::Quit,
        KeyCode::Char('w' | 'W') | KeyCode::Up => GameInput::Direction(Direction::Up),
        KeyCode::Char('s' | 'S') | KeyCode::Down => GameInput::Direction(Direction::Down),
        KeyCode::Char('a' | 'A') | KeyCode::Left => GameInput::Direction(Direction::Left),
        KeyCode::Char('d' | 'D') | KeyCode::Right => GameInput::Direction(Direction::Right),
        _ => return None,
    };
    Some(input)
}

/// Non-blocking keyboard reader.
///
/// Raw mode is owned by [`TerminalSession`](crate::terminal_runtime::TerminalSession);
/// this type only drains the crossterm event queue.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the next pending command, or `None` when no key is waiting.
    ///
    /// Never blocks: the event queue is polled with a zero timeout. Non-key
    /// events (resize, focus, mouse) are discarded while looking for a key, and
    /// at most one key press is consumed per call.
    pub fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                return Ok(map_key_event(key));
            }
        }

        Ok(None)
    }
}
