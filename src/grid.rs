use crate::config::{
    GLYPH_BONUS, GLYPH_EMPTY, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GridSize,
};
use crate::food::Items;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Content of one playfield cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Body,
    Head(Direction),
    Food,
    Bonus,
}

impl Cell {
    /// Returns the display glyph for this cell.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => GLYPH_EMPTY,
            Self::Body => GLYPH_SNAKE_BODY,
            Self::Head(Direction::Up) => GLYPH_SNAKE_HEAD_UP,
            Self::Head(Direction::Down) => GLYPH_SNAKE_HEAD_DOWN,
            Self::Head(Direction::Left) => GLYPH_SNAKE_HEAD_LEFT,
            Self::Head(Direction::Right) => GLYPH_SNAKE_HEAD_RIGHT,
            Self::Food => GLYPH_FOOD,
            Self::Bonus => GLYPH_BONUS,
        }
    }

    /// Returns true for head and body cells.
    #[must_use]
    pub fn is_snake(self) -> bool {
        matches!(self, Self::Body | Self::Head(_))
    }
}

/// Row-major snapshot of the playfield, rebuilt from scratch every tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.total_cells()],
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Redraws every cell from the snake and item state.
    ///
    /// Pending and off-board segments are skipped. The head is drawn last.
    pub fn rebuild(&mut self, snake: &Snake, items: &Items) {
        self.cells.fill(Cell::Empty);

        for segment in snake.segments() {
            if let Some(position) = segment.position() {
                self.set(position, Cell::Body);
            }
        }

        if let Some(position) = items.food {
            self.set(position, Cell::Food);
        }
        if let Some(position) = items.bonus_position() {
            self.set(position, Cell::Bonus);
        }

        self.set(snake.head(), Cell::Head(snake.direction()));
    }

    /// Returns the cell at `position`, or `None` off the board.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|index| self.cells[index])
    }

    /// Returns true when every cell shows part of the snake.
    #[must_use]
    pub fn is_filled_by_snake(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_snake())
    }

    #[cfg(test)]
    fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(usize::from(self.size.width).max(1))
            .map(|row| row.iter().map(|cell| cell.glyph()).collect())
    }

    fn set(&mut self, position: Position, cell: Cell) {
        if let Some(index) = self.index(position) {
            self.cells[index] = cell;
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !position.is_within_bounds(self.size) {
            return None;
        }

        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        Some(y * usize::from(self.size.width) + x)
    }
}
