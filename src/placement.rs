//! Random cell selection under exclusion constraints.

use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Random draws attempted per board cell before switching to a full scan.
const REJECTION_ATTEMPTS_PER_CELL: usize = 4;

/// Picks a uniformly random cell for which `is_blocked` is false.
///
/// Samples random cells first, which is cheap while the board is mostly empty.
/// After a bounded number of misses it scans the board and chooses among the
/// remaining free cells, so a nearly full board cannot stall the loop.
/// Returns `None` only when every cell is blocked.
pub fn free_position<R, F>(rng: &mut R, bounds: GridSize, is_blocked: F) -> Option<Position>
where
    R: Rng + ?Sized,
    F: Fn(Position) -> bool,
{
    if bounds.total_cells() == 0 {
        return None;
    }

    let attempts = bounds.total_cells() * REJECTION_ATTEMPTS_PER_CELL;
    for _ in 0..attempts {
        let candidate = random_position(rng, bounds);
        if !is_blocked(candidate) {
            return Some(candidate);
        }
    }

    let mut candidates = Vec::new();
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !is_blocked(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

/// Picks a free cell that is off the snake and differs from `other_item`.
pub fn item_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    other_item: Option<Position>,
) -> Option<Position> {
    free_position(rng, bounds, |position| {
        snake.occupies(position) || Some(position) == other_item
    })
}

fn random_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{free_position, item_position};

    #[test]
    fn item_never_lands_on_snake_or_other_item() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };
        let snake = Snake::from_segments(
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
            ],
            Direction::Left,
        );
        let other = Position::new(4, 4);

        for _ in 0..200 {
            let position =
                item_position(&mut rng, bounds, &snake, Some(other)).expect("board has room");
            assert!(!snake.occupies(position));
            assert_ne!(position, other);
            assert!(position.is_within_bounds(bounds));
        }
    }

    #[test]
    fn nearly_full_board_yields_the_only_free_cell() {
        let bounds = GridSize {
            width: 6,
            height: 5,
        };
        let free = Position::new(3, 2);
        let mut cells = Vec::new();
        for y in 0..5 {
            for x in 0..6 {
                let cell = Position::new(x, y);
                if cell != free {
                    cells.push(cell);
                }
            }
        }
        let snake = Snake::from_segments(cells, Direction::Right);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(item_position(&mut rng, bounds, &snake, None), Some(free));
        }
    }

    #[test]
    fn full_board_has_no_position() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = GridSize {
            width: 3,
            height: 3,
        };

        assert_eq!(free_position(&mut rng, bounds, |_| true), None);
    }

    #[test]
    fn empty_board_has_no_position() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = GridSize {
            width: 0,
            height: 4,
        };

        assert_eq!(free_position(&mut rng, bounds, |_| false), None);
    }
}
