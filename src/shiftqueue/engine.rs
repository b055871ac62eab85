use std::fmt;

use tracing::trace;

use crate::error::GridQueueError;
use crate::grid::{Coord, Grid, Iter};
use crate::queue::{GridQueue, debug_summary, write_summary};

pub struct ShiftQueue<T> {
    grid: Grid<T>,
    usage: usize,
}

impl<T> ShiftQueue<T> {
    pub fn new(side: usize) -> Result<Self, GridQueueError> {
        Ok(Self {
            grid: Grid::new(side)?,
            usage: 0,
        })
    }

    #[inline(always)]
    fn coord(&self, index: usize) -> Coord {
        Coord::from_linear(index, self.grid.side())
    }
}

impl<T> GridQueue<T> for ShiftQueue<T> {
    fn with_side(side: usize) -> Result<Self, GridQueueError> {
        Self::new(side)
    }

    fn enqueue(&mut self, value: T) -> bool {
        if self.usage == self.grid.capacity() {
            trace!(capacity = self.usage, "shift queue full, enqueue rejected");
            return false;
        }
        let at = self.coord(self.usage);
        self.grid.put(at, value);
        self.usage += 1;
        true
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.usage == 0 {
            return None;
        }
        let value = self.grid.take(Coord::ORIGIN);
        // Each move empties its source, so the last live slot ends unoccupied.
        for index in 1..self.usage {
            let from = self.coord(index);
            let to = self.coord(index - 1);
            self.grid.relocate(from, to);
        }
        self.usage -= 1;
        value
    }

    fn peek(&self) -> Option<&T> {
        if self.usage == 0 {
            return None;
        }
        self.grid.get(Coord::ORIGIN)
    }

    #[inline]
    fn usage(&self) -> usize {
        self.usage
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.grid.capacity()
    }

    #[inline]
    fn side(&self) -> usize {
        self.grid.side()
    }

    #[inline]
    fn front(&self) -> Coord {
        Coord::ORIGIN
    }

    #[inline]
    fn back(&self) -> Coord {
        self.coord(self.usage % self.grid.capacity())
    }

    fn is_occupied(&self, at: Coord) -> bool {
        self.grid.is_occupied(at)
    }

    fn cell_touches(&self) -> u64 {
        self.grid.touches()
    }

    fn iter(&self) -> Iter<'_, T> {
        self.grid.iter(Coord::ORIGIN, self.usage)
    }
}

impl<'a, T> IntoIterator for &'a ShiftQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Display for ShiftQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}

impl<T> fmt::Debug for ShiftQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_summary("ShiftQueue", self, f)
    }
}
