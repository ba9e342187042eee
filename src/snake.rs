use std::collections::{HashSet, VecDeque};

use crate::grid::GridSpace;
use crate::{Cell, GridInt};
use Direction::*;
use MoveResult::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> Cell {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Why a move killed the snake. Only logged; the player just sees the game end.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    Boundary,
    SelfCollision,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Alive { new_head: Cell },
    Dead(Collision),
}

/// Head is the front of `body`. `occupied` mirrors `body` for O(1) lookups.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    occupied: HashSet<Cell>,
    direction: Direction,
    grow_next_move: bool,
}

impl Snake {
    /// A straight snake of `size` cells with its head at `head`, trailing away
    /// from `direction`.
    pub fn new(head: Cell, size: usize, direction: Direction) -> Self {
        let diff = direction.delta();

        let body: VecDeque<Cell> = (0..size.max(1) as GridInt)
            .map(|i| (head.0 - diff.0 * i, head.1 - diff.1 * i))
            .collect();
        let occupied = body.iter().copied().collect();
        Snake { body, occupied, direction, grow_next_move: false }
    }

    /// The starting snake: centered on the grid and facing right
    pub fn initial(grid: &GridSpace, size: usize) -> Self {
        Snake::new(grid.center(), size, Right)
    }

    #[cfg(test)]
    pub fn from_cells(cells: &[Cell], direction: Direction) -> Self {
        assert!(!cells.is_empty(), "a snake needs at least one cell");
        let body: VecDeque<Cell> = cells.iter().copied().collect();
        let occupied = body.iter().copied().collect();
        Snake { body, occupied, direction, grow_next_move: false }
    }

    pub fn body(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn occupied(&self) -> &HashSet<Cell> {
        &self.occupied
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Advances one cell. The body is checked before the tail moves, so the cell
    /// the tail is about to leave still counts as occupied.
    pub fn move_step(&mut self, grid: &GridSpace) -> MoveResult {
        let old_head = self.head();
        let diff = self.direction.delta();
        let new_head = (old_head.0 + diff.0, old_head.1 + diff.1);

        if !grid.contains(new_head) {
            return Dead(Collision::Boundary);
        }
        if self.occupied.contains(&new_head) {
            return Dead(Collision::SelfCollision);
        }

        self.body.push_front(new_head);
        self.occupied.insert(new_head);

        if self.grow_next_move {
            self.grow_next_move = false;
        } else if let Some(old_tail) = self.body.pop_back() {
            self.occupied.remove(&old_tail);
        }

        Alive { new_head }
    }

    /// Ignores a reversal, which would run the head straight into the neck
    pub fn set_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.direction = new_direction;
        }
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn grow(&mut self) {
        self.grow_next_move = true;
    }
}
