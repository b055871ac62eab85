use std::fmt;

use tracing::trace;

use crate::error::GridQueueError;
use crate::grid::{Coord, Grid, Iter};
use crate::queue::{GridQueue, debug_summary, write_summary};

pub struct RingQueue<T> {
    grid: Grid<T>,
    usage: usize,
    front: Coord,
    back: Coord,
}

impl<T> RingQueue<T> {
    pub fn new(side: usize) -> Result<Self, GridQueueError> {
        Ok(Self {
            grid: Grid::new(side)?,
            usage: 0,
            front: Coord::ORIGIN,
            back: Coord::ORIGIN,
        })
    }
}

impl<T> GridQueue<T> for RingQueue<T> {
    fn with_side(side: usize) -> Result<Self, GridQueueError> {
        Self::new(side)
    }

    fn enqueue(&mut self, value: T) -> bool {
        if self.usage == self.grid.capacity() {
            trace!(capacity = self.usage, "ring queue full, enqueue rejected");
            return false;
        }
        self.grid.put(self.back, value);
        self.usage += 1;
        self.back = self.back.advance(self.grid.side());
        true
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.usage == 0 {
            return None;
        }
        // Clear the cell before the cursor leaves it.
        let value = self.grid.take(self.front);
        debug_assert!(value.is_some(), "front cell {} unoccupied", self.front);
        self.usage -= 1;
        self.front = self.front.advance(self.grid.side());
        value
    }

    fn peek(&self) -> Option<&T> {
        if self.usage == 0 {
            return None;
        }
        self.grid.get(self.front)
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
        self.front
    }

    #[inline]
    fn back(&self) -> Coord {
        self.back
    }

    fn is_occupied(&self, at: Coord) -> bool {
        self.grid.is_occupied(at)
    }

    fn cell_touches(&self) -> u64 {
        self.grid.touches()
    }

    fn iter(&self) -> Iter<'_, T> {
        self.grid.iter(self.front, self.usage)
    }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Display for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}

impl<T> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_summary("RingQueue", self, f)
    }
}
