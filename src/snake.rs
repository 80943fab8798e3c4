use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighbouring cell in `direction`, without any bounds handling.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    value.rem_euclid(upper_bound)
}

/// One body slot of the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Segment {
    /// The segment occupies a real cell.
    OnGrid(Position),
    /// Freshly grown and not yet reached by the trailing motion.
    Pending,
}

impl Segment {
    /// Returns the cell this segment occupies, if any.
    #[must_use]
    pub fn position(self) -> Option<Position> {
        match self {
            Self::OnGrid(position) => Some(position),
            Self::Pending => None,
        }
    }
}

/// Snake head, heading, and trailing body.
///
/// `body` is ordered head to tail. After every completed tick `body[0]` sits on
/// the head cell; between [`advance_head`](Self::advance_head) and
/// [`shift_body`](Self::shift_body) it still holds the head's previous cell.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    head: Position,
    direction: Direction,
    body: Vec<Segment>,
}

impl Snake {
    /// Creates a straight snake of `length` segments with its head at `head`,
    /// trailing away from `direction`.
    ///
    /// Segments that would start outside `bounds` are created as
    /// [`Segment::Pending`] and slide onto the board as the snake moves. This
    /// is the one case where more than one segment can be pending at once;
    /// afterwards only [`grow`](Self::grow) adds them, one per meal.
    #[must_use]
    pub fn new(head: Position, direction: Direction, length: usize, bounds: GridSize) -> Self {
        let behind = direction.opposite();
        let mut cell = head;
        let mut body = Vec::with_capacity(length.max(1));

        for _ in 0..length.max(1) {
            body.push(if cell.is_within_bounds(bounds) {
                Segment::OnGrid(cell)
            } else {
                Segment::Pending
            });
            cell = cell.step(behind);
        }

        Self {
            head,
            direction,
            body,
        }
    }

    /// Creates a snake from explicit body cells (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");

        Self {
            head: segments[0],
            direction,
            body: segments.into_iter().map(Segment::OnGrid).collect(),
        }
    }

    /// Changes heading unless `direction` is the exact reverse of the current one.
    ///
    /// Returns whether the change was accepted.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.direction = direction;
        true
    }

    /// Moves the head one cell in the current direction.
    ///
    /// With `wrap` set the head re-enters from the opposite edge; otherwise it
    /// may end up outside `bounds` and [`is_outside_bounds`](Self::is_outside_bounds)
    /// reports it. Wrapping happens here, before
    /// [`intersects_self`](Self::intersects_self) runs, so a head that wraps
    /// onto the body counts as a collision.
    pub fn advance_head(&mut self, bounds: GridSize, wrap: bool) {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        let next = self.head.step(self.direction);
        self.head = if wrap { next.wrapped(bounds) } else { next };
    }

    /// Moves every segment into its predecessor's slot, tail first; `body[0]`
    /// takes the head cell.
    pub fn shift_body(&mut self) {
        for index in (1..self.body.len()).rev() {
            self.body[index] = self.body[index - 1];
        }

        if let Some(first) = self.body.first_mut() {
            *first = Segment::OnGrid(self.head);
        }
    }

    /// Returns true if the head sits on any trailing segment.
    ///
    /// `body[0]` is skipped: it is the head's own previous cell.
    #[must_use]
    pub fn intersects_self(&self) -> bool {
        self.body
            .iter()
            .skip(1)
            .any(|segment| segment.position() == Some(self.head))
    }

    /// Returns true if the head lies outside `bounds`.
    #[must_use]
    pub fn is_outside_bounds(&self, bounds: GridSize) -> bool {
        !self.head.is_within_bounds(bounds)
    }

    /// Appends one [`Segment::Pending`] at the tail.
    pub fn grow(&mut self) {
        self.body.push(Segment::Pending);
    }

    /// Returns true if the head or any on-grid segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.head == position
            || self
                .body
                .iter()
                .any(|segment| segment.position() == Some(position))
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns current segment count, pending segments included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    /// Number of segments still waiting to come onto the board.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.body
            .iter()
            .filter(|segment| **segment == Segment::Pending)
            .count()
    }
}
