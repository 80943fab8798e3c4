use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GameConfig, GridSize};
use crate::food::{BonusEvent, Items};
use crate::grid::Grid;
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// How a finished round is scored.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    /// The snake covers every cell of the board.
    Won,
    Lost,
}

/// Why the round stopped.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    SelfCollision,
    WallCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFull,
    Quit,
}

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Ended(Outcome),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub items: Items,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    grid: Grid,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from OS entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let bounds = config.grid;
        let start = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let snake = Snake::new(start, Direction::Right, config.initial_length, bounds);
        let spawned = Items::spawn(&mut rng, &config, &snake);
        let items = spawned.unwrap_or(Items {
            food: None,
            bonus: None,
        });

        let mut state = Self {
            snake,
            items,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            end_reason: None,
            grid: Grid::new(bounds),
            config,
            rng,
        };
        state.rebuild_grid();

        if spawned.is_none() {
            state.finish(EndReason::BoardFull);
        }

        state
    }

    /// Applies one external input event.
    ///
    /// Direction changes that reverse the snake are ignored. Quit and
    /// interrupt both end the round; the caller decides whether the process
    /// exits right away.
    pub fn apply_input(&mut self, input: GameInput) {
        if self.status != GameStatus::Running {
            return;
        }

        match input {
            GameInput::Direction(direction) => {
                if !self.snake.turn(direction) {
                    debug!("ignored reversal towards {direction:?}");
                }
            }
            GameInput::Quit | GameInput::Interrupt => self.finish(EndReason::Quit),
        }
    }

    /// Runs one full loop step: optional input followed by a tick.
    pub fn update(&mut self, input: Option<GameInput>) {
        if let Some(input) = input {
            self.apply_input(input);
        }
        self.tick();
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.tick_count += 1;
        self.snake.advance_head(self.config.grid, self.config.wrap);

        if self.snake.intersects_self() {
            self.finish(EndReason::SelfCollision);
            return;
        }

        if self.snake.is_outside_bounds(self.config.grid) {
            self.finish(EndReason::WallCollision);
            return;
        }

        let head = self.snake.head();
        let meal = self
            .items
            .consume(head, &mut self.rng, &self.config, &mut self.snake);
        if let Some(meal) = meal {
            self.score += meal.points(&self.config);
            debug!(
                "ate {meal:?} at ({}, {}); score {} length {}",
                head.x,
                head.y,
                self.score,
                self.snake.len()
            );
        }

        match self
            .items
            .update_bonus(&mut self.rng, &self.config, &self.snake)
        {
            Some(BonusEvent::Spawned(bonus)) => debug!(
                "bonus spawned at ({}, {}) for {} ticks",
                bonus.position.x, bonus.position.y, bonus.ttl_ticks
            ),
            Some(BonusEvent::Expired(position)) => {
                debug!("bonus at ({}, {}) expired", position.x, position.y);
            }
            Some(BonusEvent::Ticked(_)) | None => {}
        }

        self.snake.shift_body();
        if self.items.food.is_none() {
            self.restock_food();
        }
        self.rebuild_grid();

        if self.items.food.is_none() && self.grid.is_filled_by_snake() {
            self.finish(EndReason::BoardFull);
        }
    }

    /// Redraws the grid buffer from the current snake and items.
    pub fn rebuild_grid(&mut self) {
        self.grid.rebuild(&self.snake, &self.items);
    }

    /// Scores the round from the last rebuilt grid: won only if the snake
    /// covers every cell.
    #[must_use]
    pub fn end_state(&self) -> Outcome {
        if self.grid.is_filled_by_snake() {
            Outcome::Won
        } else {
            Outcome::Lost
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the grid buffer as of the last completed tick.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the remaining bonus lifetime, if a bonus is active.
    #[must_use]
    pub fn bonus_timer(&self) -> Option<u16> {
        self.items.bonus_timer()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Retries food placement after the last free cell went to the bonus.
    fn restock_food(&mut self) {
        self.items
            .regenerate_food(&mut self.rng, &self.config, &self.snake);
        if let Some(food) = self.items.food {
            debug!("food restocked at ({}, {})", food.x, food.y);
        }
    }

    fn finish(&mut self, reason: EndReason) {
        let outcome = self.end_state();
        self.status = GameStatus::Ended(outcome);
        self.end_reason = Some(reason);
        info!(
            "round ended after {} ticks: {reason:?}, {outcome:?}, score {}, length {}",
            self.tick_count,
            self.score,
            self.snake.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::food::{Bonus, Items};
    use crate::grid::Cell;
    use crate::input::{Direction, GameInput};

    use super::{EndReason, GameState, GameStatus, Outcome};
    use crate::snake::{Position, Snake};

    fn quiet(width: u16, height: u16) -> GameConfig {
        GameConfig {
            bonus_chance: 0,
            ..GameConfig::with_grid(width, height)
        }
    }

    #[test]
    fn new_game_starts_centered_and_running() {
        let state = GameState::new_with_seed(GameConfig::default(), 1);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.head(), Position::new(15, 10));
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.snake.len(), 5);
        assert!(state.items.food.is_some_and(|food| !state.snake.occupies(food)));
        assert_eq!(state.items.bonus, None);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn moving_right_on_a_small_board_stays_alive() {
        let mut state = GameState::new_with_seed(quiet(5, 5), 2);
        state.snake = Snake::new(Position::new(1, 2), Direction::Right, 3, state.bounds());
        state.items.food = Some(Position::new(0, 0));

        for _ in 0..3 {
            state.tick();
            assert_eq!(state.status, GameStatus::Running);
        }

        assert_eq!(state.snake.head(), Position::new(4, 2));
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn reverse_input_is_rejected_and_wall_ends_round() {
        let mut state = GameState::new_with_seed(quiet(5, 5), 3);
        state.snake = Snake::from_segments(
            vec![
                Position::new(0, 2),
                Position::new(1, 2),
                Position::new(2, 2),
                Position::new(3, 2),
            ],
            Direction::Left,
        );
        state.items.food = Some(Position::new(4, 4));

        state.apply_input(GameInput::Direction(Direction::Right));
        assert_eq!(state.snake.direction(), Direction::Left);

        state.tick();

        assert_eq!(state.snake.head(), Position::new(-1, 2));
        assert_eq!(state.status, GameStatus::Ended(Outcome::Lost));
        assert_eq!(state.end_reason, Some(EndReason::WallCollision));
    }

    #[test]
    fn wrapping_board_relocates_the_head() {
        let mut config = quiet(5, 5);
        config.wrap = true;
        let mut state = GameState::new_with_seed(config, 4);
        state.snake = Snake::new(Position::new(0, 2), Direction::Left, 2, state.bounds());
        state.items.food = Some(Position::new(2, 0));

        state.tick();

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.head(), Position::new(4, 2));
    }

    #[test]
    fn eating_food_scores_and_grows() {
        let mut state = GameState::new_with_seed(quiet(10, 10), 5);
        state.snake = Snake::new(Position::new(2, 3), Direction::Right, 3, state.bounds());
        state.items = Items {
            food: Some(Position::new(3, 3)),
            bonus: Some(Bonus {
                position: Position::new(8, 8),
                ttl_ticks: 50,
            }),
        };

        state.tick();

        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.snake.pending_len(), 0);
        let food = state.items.food.expect("the board has free cells");
        assert!(!state.snake.occupies(food));
        assert_ne!(Some(food), state.items.bonus_position());
    }

    #[test]
    fn eating_bonus_scores_ten_and_skips_countdown() {
        let mut state = GameState::new_with_seed(quiet(10, 10), 6);
        state.snake = Snake::new(Position::new(2, 3), Direction::Right, 3, state.bounds());
        state.items = Items {
            food: Some(Position::new(9, 9)),
            bonus: Some(Bonus {
                position: Position::new(3, 3),
                ttl_ticks: 50,
            }),
        };

        state.tick();

        assert_eq!(state.score, 10);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.bonus_timer(), None);
    }

    #[test]
    fn bonus_timer_counts_down_each_tick() {
        let mut state = GameState::new_with_seed(quiet(20, 5), 7);
        state.snake = Snake::new(Position::new(2, 2), Direction::Right, 2, state.bounds());
        state.items = Items {
            food: Some(Position::new(0, 0)),
            bonus: Some(Bonus {
                position: Position::new(19, 0),
                ttl_ticks: 3,
            }),
        };

        state.tick();
        assert_eq!(state.bonus_timer(), Some(2));
        state.tick();
        assert_eq!(state.bonus_timer(), Some(1));
        state.tick();
        assert_eq!(state.bonus_timer(), None);
    }

    #[test]
    fn snake_collision_with_self_sets_game_over() {
        let mut state = GameState::new_with_seed(quiet(6, 6), 8);
        state.snake = Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
            ],
            Direction::Down,
        );
        state.items.food = Some(Position::new(5, 5));

        state.tick();

        assert_eq!(state.status, GameStatus::Ended(Outcome::Lost));
        assert_eq!(state.end_reason, Some(EndReason::SelfCollision));
    }

    #[test]
    fn wrapped_head_landing_on_body_collides() {
        let mut config = quiet(4, 1);
        config.wrap = true;
        let mut state = GameState::new_with_seed(config, 9);
        state.snake = Snake::from_segments(
            vec![
                Position::new(3, 0),
                Position::new(2, 0),
                Position::new(1, 0),
                Position::new(0, 0),
            ],
            Direction::Right,
        );

        state.tick();

        assert_eq!(state.end_reason, Some(EndReason::SelfCollision));
    }

    #[test]
    fn quit_ends_the_round_without_moving() {
        let mut state = GameState::new_with_seed(quiet(10, 10), 10);
        let head = state.snake.head();

        state.update(Some(GameInput::Quit));

        assert_eq!(state.status, GameStatus::Ended(Outcome::Lost));
        assert_eq!(state.end_reason, Some(EndReason::Quit));
        assert_eq!(state.snake.head(), head);
        assert_eq!(state.tick_count, 0);
    }

    #[test]
    fn full_board_is_a_win() {
        let mut state = GameState::new_with_seed(quiet(2, 2), 11);
        state.snake = Snake::from_segments(
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(0, 1),
            ],
            Direction::Up,
        );
        state.items.food = Some(Position::new(0, 0));

        state.rebuild_grid();

        assert_eq!(state.end_state(), Outcome::Won);
    }

    #[test]
    fn eating_the_last_free_cell_wins() {
        let mut state = GameState::new_with_seed(quiet(3, 1), 12);
        state.snake = Snake::from_segments(
            vec![Position::new(1, 0), Position::new(0, 0)],
            Direction::Right,
        );
        state.items.food = Some(Position::new(2, 0));

        state.tick();

        assert_eq!(state.status, GameStatus::Ended(Outcome::Won));
        assert_eq!(state.end_reason, Some(EndReason::BoardFull));
        assert_eq!(state.score, 1);
    }

    #[test]
    fn bonus_on_the_last_free_cell_keeps_the_round_running() {
        let mut state = GameState::new_with_seed(quiet(3, 1), 14);
        state.snake = Snake::from_segments(vec![Position::new(0, 0)], Direction::Right);
        state.items = Items {
            food: Some(Position::new(1, 0)),
            bonus: Some(Bonus {
                position: Position::new(2, 0),
                ttl_ticks: 50,
            }),
        };

        state.tick();

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.end_reason, None);
        assert_eq!(state.score, 1);
        assert_eq!(state.items.food, None);
        assert_eq!(state.grid().get(Position::new(2, 0)), Some(Cell::Bonus));

        state.tick();

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 11);
        assert_eq!(state.items.bonus, None);
        assert_eq!(state.items.food, Some(Position::new(0, 0)));
    }

    #[test]
    fn expired_bonus_frees_its_cell_for_food() {
        let mut state = GameState::new_with_seed(quiet(4, 1), 15);
        state.snake = Snake::from_segments(
            vec![Position::new(1, 0), Position::new(0, 0)],
            Direction::Right,
        );
        state.items = Items {
            food: Some(Position::new(2, 0)),
            bonus: Some(Bonus {
                position: Position::new(3, 0),
                ttl_ticks: 1,
            }),
        };

        state.tick();

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.items.bonus, None);
        assert_eq!(state.items.food, Some(Position::new(3, 0)));
    }

    #[test]
    fn ended_round_ignores_further_ticks() {
        let mut state = GameState::new_with_seed(quiet(10, 10), 13);
        state.apply_input(GameInput::Quit);
        let ticks = state.tick_count;

        state.tick();
        state.apply_input(GameInput::Direction(Direction::Up));

        assert_eq!(state.tick_count, ticks);
        assert_eq!(state.snake.direction(), Direction::Right);
    }
}
