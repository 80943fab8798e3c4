use std::time::Duration;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default playfield width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default playfield height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Default pause between two simulation ticks in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 80;

/// A bonus appears with a chance of `1 / DEFAULT_BONUS_CHANCE` per tick.
pub const DEFAULT_BONUS_CHANCE: u32 = 400;

/// Shortest bonus lifespan in ticks.
pub const DEFAULT_BONUS_MIN_TICKS: u16 = 30;

/// Longest bonus lifespan in ticks.
pub const DEFAULT_BONUS_MAX_TICKS: u16 = 120;

/// Number of body segments the snake starts with.
pub const DEFAULT_INITIAL_LENGTH: usize = 5;

/// Points awarded for regular food.
pub const DEFAULT_FOOD_SCORE: u32 = 1;

/// Points awarded for a bonus item.
pub const DEFAULT_BONUS_SCORE: u32 = 10;

/// How long the final frame stays on screen before the terminal is restored.
pub const DEFAULT_END_SCREEN_DELAY_MS: u64 = 1500;

/// Gameplay tunables for one session.
///
/// Everything here is fixed at compile time for the shipped binary; the struct
/// exists so [`GameState::new_with_seed`](crate::game::GameState::new_with_seed)
/// can run the same rules on tiny boards.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    /// Playfield dimensions.
    pub grid: GridSize,
    /// Crossing an edge re-enters from the opposite edge instead of ending the round.
    pub wrap: bool,
    /// Sleep between ticks.
    pub tick_interval: Duration,
    /// Denominator of the per-tick bonus spawn probability.
    pub bonus_chance: u32,
    /// Inclusive lower bound of a bonus lifespan, in ticks.
    pub bonus_min_ticks: u16,
    /// Inclusive upper bound of a bonus lifespan, in ticks.
    pub bonus_max_ticks: u16,
    /// Segment count at game start.
    pub initial_length: usize,
    pub food_score: u32,
    pub bonus_score: u32,
    /// Hold time for the "You Won!" / "Game Over!" frame.
    pub end_screen_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            wrap: false,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            bonus_chance: DEFAULT_BONUS_CHANCE,
            bonus_min_ticks: DEFAULT_BONUS_MIN_TICKS,
            bonus_max_ticks: DEFAULT_BONUS_MAX_TICKS,
            initial_length: DEFAULT_INITIAL_LENGTH,
            food_score: DEFAULT_FOOD_SCORE,
            bonus_score: DEFAULT_BONUS_SCORE,
            end_screen_delay: Duration::from_millis(DEFAULT_END_SCREEN_DELAY_MS),
        }
    }
}

impl GameConfig {
    /// Returns the default configuration on a board of the given size.
    #[must_use]
    pub fn with_grid(width: u16, height: u16) -> Self {
        Self {
            grid: GridSize { width, height },
            ..Self::default()
        }
    }
}

/// Glyph for body segments.
pub const GLYPH_SNAKE_BODY: char = '*';

/// Head glyph while moving up.
pub const GLYPH_SNAKE_HEAD_UP: char = 'v';

/// Head glyph while moving down.
pub const GLYPH_SNAKE_HEAD_DOWN: char = '^';

/// Head glyph while moving left.
pub const GLYPH_SNAKE_HEAD_LEFT: char = '>';

/// Head glyph while moving right.
pub const GLYPH_SNAKE_HEAD_RIGHT: char = '<';

/// Glyph for regular food.
pub const GLYPH_FOOD: char = '@';

/// Glyph for the bonus item.
pub const GLYPH_BONUS: char = '$';

/// Glyph for an empty cell.
pub const GLYPH_EMPTY: char = ' ';

pub const GLYPH_BORDER_CORNER: &str = "+";
pub const GLYPH_BORDER_VERTICAL: &str = "|";
pub const GLYPH_BORDER_HORIZONTAL: &str = "-";
