//! Cell storage shared by both queue variants.
//!
//! An N x N grid is kept as one flat boxed slice indexed row-major, so a
//! `Coord` maps to slot `row * side + col`. Each slot is an `Option`, which
//! makes occupancy a tag rather than a reserved payload value.

use std::fmt;
use std::iter::FusedIterator;

use tracing::debug;

use crate::error::GridQueueError;

/// A `(row, col)` position inside the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of linear index `index` on a grid of the given side.
    #[inline(always)]
    pub const fn from_linear(index: usize, side: usize) -> Self {
        Self {
            row: index / side,
            col: index % side,
        }
    }

    /// Next position in row-major order. The column moves first; when it
    /// wraps to 0 the row moves, and both wrap modulo `side`.
    #[inline(always)]
    pub const fn advance(self, side: usize) -> Self {
        let col = (self.col + 1) % side;
        let row = if col == 0 {
            (self.row + 1) % side
        } else {
            self.row
        };
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub struct Grid<T> {
    cells: Box<[Option<T>]>,
    side: usize,
    touches: u64,
}

impl<T> Grid<T> {
    pub fn new(side: usize) -> Result<Self, GridQueueError> {
        let capacity = side
            .checked_mul(side)
            .filter(|&capacity| capacity > 0)
            .ok_or(GridQueueError::InvalidCapacity { side })?;
        let cells = std::iter::repeat_with(|| None).take(capacity).collect();
        debug!(side, capacity, "allocated grid");
        Ok(Self {
            cells,
            side,
            touches: 0,
        })
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Number of values placed, taken or moved since construction.
    #[inline]
    pub fn touches(&self) -> u64 {
        self.touches
    }

    #[inline(always)]
    fn slot(&self, at: Coord) -> Option<usize> {
        (at.row < self.side && at.col < self.side).then_some(at.row * self.side + at.col)
    }

    #[inline]
    pub fn get(&self, at: Coord) -> Option<&T> {
        self.slot(at).and_then(|slot| self.cells[slot].as_ref())
    }

    #[inline]
    pub fn is_occupied(&self, at: Coord) -> bool {
        self.get(at).is_some()
    }

    /// Store `value` at `at`. The cell must be unoccupied and in range.
    #[inline]
    pub fn put(&mut self, at: Coord, value: T) {
        let slot = self.slot(at);
        debug_assert!(slot.is_some(), "put outside grid at {at}");
        let Some(slot) = slot else {
            return;
        };
        debug_assert!(self.cells[slot].is_none(), "put over live cell at {at}");
        self.cells[slot] = Some(value);
        self.touches += 1;
    }

    /// Remove and return the value at `at`, leaving the cell unoccupied.
    #[inline]
    pub fn take(&mut self, at: Coord) -> Option<T> {
        let value = self.slot(at).and_then(|slot| self.cells[slot].take());
        if value.is_some() {
            self.touches += 1;
        }
        value
    }

    /// Move the value at `from` into `to`, leaving `from` unoccupied.
    #[inline]
    pub fn relocate(&mut self, from: Coord, to: Coord) {
        let (Some(src), Some(dst)) = (self.slot(from), self.slot(to)) else {
            debug_assert!(
                self.slot(from).is_some() && self.slot(to).is_some(),
                "relocate outside grid: {from} -> {to}"
            );
            return;
        };
        let value = self.cells[src].take();
        if value.is_some() {
            self.touches += 1;
        }
        self.cells[dst] = value;
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Walk `len` cells row-major from `start`, wrapping around the grid.
    #[inline]
    pub fn iter(&self, start: Coord, len: usize) -> Iter<'_, T> {
        Iter {
            grid: self,
            at: start,
            remaining: len.min(self.capacity()),
        }
    }
}

impl<T> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("side", &self.side)
            .field("occupied", &self.occupied())
            .field("touches", &self.touches)
            .finish()
    }
}

/// FIFO traversal over a live span of the grid.
///
/// Created by [`crate::GridQueue::iter`]. Never mutates the queue, and a new
/// one can be taken at any time to restart from the front.
pub struct Iter<'a, T> {
    grid: &'a Grid<T>,
    at: Coord,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            let at = self.at;
            self.at = at.advance(self.grid.side);
            self.remaining -= 1;
            let value = self.grid.get(at);
            debug_assert!(value.is_some(), "unoccupied cell inside live span at {at}");
            if value.is_some() {
                return value;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            at: self.at,
            remaining: self.remaining,
        }
    }
}
