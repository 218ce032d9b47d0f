use std::collections::{HashSet, VecDeque};

use super::types::{Cell, Direction};

/// Body segments head first, with a set mirror for constant-time occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    grow_pending: bool,
}

impl Snake {
    /// Lays `length` segments out behind `head`, trailing away from `direction`.
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let behind = direction.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut body_set = HashSet::with_capacity(length.max(1));

        let mut segment = head;
        for _ in 0..length.max(1) {
            body.push_back(segment);
            body_set.insert(segment);
            segment = segment.step(behind);
        }

        Self {
            body,
            body_set,
            direction,
            pending_direction: None,
            grow_pending: false,
        }
    }

    /// Builds a snake from explicit segments, head first. Duplicate cells are dropped.
    /// Returns `None` for an empty segment list.
    pub fn from_cells(cells: &[Cell], direction: Direction) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }

        let mut body = VecDeque::with_capacity(cells.len());
        let mut body_set = HashSet::with_capacity(cells.len());
        for &cell in cells {
            if body_set.insert(cell) {
                body.push_back(cell);
            }
        }
        Some(Self {
            body,
            body_set,
            direction,
            pending_direction: None,
            grow_pending: false,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Returns `false` when the turn is rejected as a reversal into the neck.
    ///
    /// The check is made against the direction applied on the last move, not the pending one,
    /// so two quick turns between ticks cannot fold the snake back onto itself.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.body.len() > 1 && direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn next_head(&self) -> Cell {
        let direction = self.pending_direction.unwrap_or(self.direction);
        self.head().step(direction)
    }

    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    pub fn is_growing(&self) -> bool {
        self.grow_pending
    }

    pub fn advance(&mut self) -> Cell {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = self.head().step(self.direction);

        if self.grow_pending {
            self.grow_pending = false;
        } else if let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }

        self.body.push_front(new_head);
        self.body_set.insert(new_head);
        new_head
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body_set.contains(&cell)
    }

    /// Whether the head shares a cell with the rest of the body. After [`Self::advance`] the
    /// vacated tail is already gone, so moving into it is not a collision.
    pub fn head_collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }
}
