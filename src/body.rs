//! The snake's body: a ring buffer of cells, tail at the front, head at the back.
//!
//! Capacity `N` is the grid's cell count, which no legal snake can exceed, so
//! the buffer never reallocates and a tick costs one push and at most one pop.

use heapless::Deque;

use crate::{
    Error,
    grid::Cell,
};

/// One drawn segment, as handed to a [`Renderer`](crate::Renderer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segment {
    pub cell: Cell,
    pub is_head: bool,
}

#[derive(Clone, Debug)]
pub struct SnakeBody<const N: usize> {
    cells: Deque<Cell, N>,
}

impl<const N: usize> SnakeBody<N> {
    /// A one-segment body at `start`.
    pub fn new(start: Cell) -> Self {
        let mut body = Self { cells: Deque::new() };
        body.reset(start);
        body
    }

    /// Build a body from a tail-first list of cells.
    pub fn from_cells(cells: &[Cell]) -> Result<Self, Error> {
        let Some((&first, rest)) = cells.split_first() else {
            return Err(Error::EmptyBody);
        };
        if cells.len() > N {
            return Err(Error::BodyTooLong);
        }

        let mut body = Self::new(first);
        for (offset, &cell) in rest.iter().enumerate() {
            let index = offset + 1;
            if !body.head().is_adjacent(cell) {
                return Err(Error::DisjointBody { index });
            }
            if body.contains(cell) {
                return Err(Error::DuplicateCell { index });
            }
            body.advance(cell, true);
        }
        Ok(body)
    }

    /// Drop every segment and start over with a single one at `start`.
    pub fn reset(&mut self, start: Cell) {
        self.cells.clear();
        self.push_head(start);
    }

    pub fn head(&self) -> Cell {
        match self.cells.back() {
            Some(cell) => *cell,
            None => panic!("snake body has no segments"),
        }
    }

    pub fn tail(&self) -> Cell {
        match self.cells.front() {
            Some(cell) => *cell,
            None => panic!("snake body has no segments"),
        }
    }

    /// Move the head to `next`. Without `grow` the tail cell is released, so
    /// the length is unchanged; with `grow` the tail stays and the body gets
    /// one segment longer.
    ///
    /// `next` must be a cardinal neighbour of the current head.
    pub fn advance(&mut self, next: Cell, grow: bool) {
        debug_assert!(
            self.head().is_adjacent(next),
            "advance to a cell that does not touch the head"
        );
        if !grow {
            self.cells.pop_front();
        }
        self.push_head(next);
    }

    /// True if any segment, head included, occupies `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.iter().any(|c| *c == cell)
    }

    /// True if the head would run into the body by moving to `cell`.
    ///
    /// Scans every segment except the head. The tail counts even though a
    /// non-growing move is about to release it.
    pub fn self_collision_at(&self, cell: Cell) -> bool {
        assert!(!self.cells.is_empty(), "collision check on an empty snake body");
        let body = self.cells.len() - 1;
        self.cells.iter().take(body).any(|c| *c == cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Cells from tail to head.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Segments from tail to head with the head flagged.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let head = self.cells.len().saturating_sub(1);
        self.cells.iter().enumerate().map(move |(i, cell)| Segment {
            cell: *cell,
            is_head: i == head,
        })
    }

    fn push_head(&mut self, cell: Cell) {
        if self.cells.push_back(cell).is_err() {
            panic!("snake body grew past {} segments", N);
        }
    }
}
