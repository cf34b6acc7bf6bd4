use super::direction::Direction;
use ratatui::layout::Position;
use std::collections::{HashSet, VecDeque};

/// The snake: where its segments are and which way it is heading
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The positions of all of the snake's segments, head first
    pub(super) segments: VecDeque<Position>,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a horizontal snake of `len` segments with its head at `head`,
    /// its body trailing off to the left, and moving rightwards.  If `head`
    /// is too close to the left edge of the coordinate space, the snake is
    /// truncated.
    pub(super) fn new(head: Position, len: u16) -> Snake {
        let segments = (0..len)
            .map_while(|i| head.x.checked_sub(i).map(|x| Position::new(x, head.y)))
            .collect();
        Snake {
            segments,
            direction: Direction::Right,
        }
    }

    /// Return the position of the snake's head
    ///
    /// # Panics
    ///
    /// Panics if the snake has no segments, which only happens when it was
    /// created with a length of zero.
    pub(super) fn head(&self) -> Position {
        self.segments[0]
    }

    pub(super) fn segments(&self) -> &VecDeque<Position> {
        &self.segments
    }

    pub(super) fn len(&self) -> usize {
        self.segments.len()
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    pub(super) fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Return the set of cells covered by the snake
    pub(super) fn occupied(&self) -> HashSet<Position> {
        self.segments.iter().copied().collect()
    }

    /// Change the snake's direction to `direction` unless that would turn it
    /// straight back on itself.  Returns `true` if the direction was changed.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Move the head to `head`.  Unless `grow` is true, the tail moves up
    /// behind it, so the length is unchanged.
    pub(super) fn advance(&mut self, head: Position, grow: bool) {
        self.segments.push_front(head);
        if !grow {
            let _ = self.segments.pop_back();
        }
    }
}
