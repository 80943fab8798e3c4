use rand::Rng;

use crate::config::GameConfig;
use crate::placement::item_position;
use crate::snake::{Position, Snake};

/// Transient high-value item with a countdown.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Bonus {
    pub position: Position,
    pub ttl_ticks: u16,
}

impl Bonus {
    /// Advances the countdown by one tick. Returns `true` once it hits zero.
    pub fn tick_ttl(&mut self) -> bool {
        self.ttl_ticks = self.ttl_ticks.saturating_sub(1);
        self.ttl_ticks == 0
    }
}

/// What the head ate this tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Meal {
    /// Regular food, already replaced elsewhere on the board.
    Food,
    /// Regular food with no free cell left for a replacement; the board stays
    /// without food until one frees up.
    LastFood,
    Bonus,
}

impl Meal {
    /// Returns the score value of this meal under `config`.
    #[must_use]
    pub fn points(self, config: &GameConfig) -> u32 {
        match self {
            Self::Food | Self::LastFood => config.food_score,
            Self::Bonus => config.bonus_score,
        }
    }
}

/// Outcome of the per-tick bonus update.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BonusEvent {
    Spawned(Bonus),
    Expired(Position),
    Ticked(u16),
}

/// The food item plus the optional bonus.
///
/// `food` is `None` only while the last free cell holds the bonus; it comes
/// back as soon as a cell frees up.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Items {
    pub food: Option<Position>,
    pub bonus: Option<Bonus>,
}

impl Items {
    /// Places the first food item off the snake. Returns `None` when the snake
    /// already covers the whole board.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig, snake: &Snake) -> Option<Self> {
        let food = item_position(rng, config.grid, snake, None)?;
        Some(Self {
            food: Some(food),
            bonus: None,
        })
    }

    /// Returns the bonus position, if a bonus is active.
    #[must_use]
    pub fn bonus_position(&self) -> Option<Position> {
        self.bonus.map(|bonus| bonus.position)
    }

    /// Returns the remaining bonus lifetime, if a bonus is active.
    #[must_use]
    pub fn bonus_timer(&self) -> Option<u16> {
        self.bonus.map(|bonus| bonus.ttl_ticks)
    }

    /// Moves the food to a random cell that is off the snake and off the bonus.
    ///
    /// Returns `false` and removes the food when no such cell exists.
    pub fn regenerate_food<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &GameConfig,
        snake: &Snake,
    ) -> bool {
        self.food = item_position(rng, config.grid, snake, self.bonus_position());
        self.food.is_some()
    }

    /// Rolls for a new bonus when none is active.
    ///
    /// The roll succeeds with probability `1 / config.bonus_chance`; a
    /// `bonus_chance` of zero disables bonuses. The lifespan is drawn from
    /// `bonus_min_ticks..=bonus_max_ticks`.
    pub fn maybe_spawn_bonus<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &GameConfig,
        snake: &Snake,
    ) -> Option<Bonus> {
        if self.bonus.is_some() || config.bonus_chance == 0 {
            return None;
        }

        if rng.gen_range(0..config.bonus_chance) != config.bonus_chance / 2 {
            return None;
        }

        let position = item_position(rng, config.grid, snake, self.food)?;
        let min_ticks = config.bonus_min_ticks.max(1);
        let max_ticks = config.bonus_max_ticks.max(min_ticks);
        let bonus = Bonus {
            position,
            ttl_ticks: rng.gen_range(min_ticks..=max_ticks),
        };

        self.bonus = Some(bonus);
        Some(bonus)
    }

    /// Counts the active bonus down by one tick, clearing it at zero.
    ///
    /// Returns the position of a bonus that expired on this tick.
    pub fn tick_bonus(&mut self) -> Option<Position> {
        let bonus = self.bonus.as_mut()?;
        if !bonus.tick_ttl() {
            return None;
        }

        let position = bonus.position;
        self.bonus = None;
        Some(position)
    }

    /// Per-tick bonus step: count down an active bonus, otherwise roll for one.
    pub fn update_bonus<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &GameConfig,
        snake: &Snake,
    ) -> Option<BonusEvent> {
        if self.bonus.is_some() {
            if let Some(position) = self.tick_bonus() {
                return Some(BonusEvent::Expired(position));
            }
            return self.bonus_timer().map(BonusEvent::Ticked);
        }

        self.maybe_spawn_bonus(rng, config, snake)
            .map(BonusEvent::Spawned)
    }

    /// Eats whatever lies at `position`.
    ///
    /// Food grows the snake and is regenerated at once; a bonus is removed
    /// without waiting for its countdown.
    pub fn consume<R: Rng + ?Sized>(
        &mut self,
        position: Position,
        rng: &mut R,
        config: &GameConfig,
        snake: &mut Snake,
    ) -> Option<Meal> {
        if self.food == Some(position) {
            snake.grow();
            if self.regenerate_food(rng, config, snake) {
                return Some(Meal::Food);
            }
            return Some(Meal::LastFood);
        }

        if self.bonus_position() == Some(position) {
            self.bonus = None;
            return Some(Meal::Bonus);
        }

        None
    }
}
