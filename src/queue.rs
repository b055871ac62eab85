//! The operation surface shared by both grid queue variants.

use std::fmt;

use crate::error::GridQueueError;
use crate::grid::{Coord, Iter};

/// A fixed-capacity FIFO queue backed by an N x N grid.
///
/// `usage` is the only full/empty disambiguator: the front and back cursors
/// coincide both when the queue is empty and when it is full.
pub trait GridQueue<T> {
    /// Build an empty queue with capacity `side * side`.
    fn with_side(side: usize) -> Result<Self, GridQueueError>
    where
        Self: Sized;

    /// Append `value` at the back. Returns `false` without touching any
    /// state when the queue is full.
    #[must_use]
    fn enqueue(&mut self, value: T) -> bool;

    /// Remove the oldest value, or `None` when empty.
    fn dequeue(&mut self) -> Option<T>;

    /// The oldest value without removing it.
    fn peek(&self) -> Option<&T>;

    fn usage(&self) -> usize;

    fn capacity(&self) -> usize;

    fn side(&self) -> usize;

    /// Cell the next dequeue reads.
    fn front(&self) -> Coord;

    /// Cell the next enqueue writes.
    fn back(&self) -> Coord;

    fn is_occupied(&self, at: Coord) -> bool;

    /// Values placed, taken or moved in the grid since construction.
    fn cell_touches(&self) -> u64;

    /// Live values oldest first.
    fn iter(&self) -> Iter<'_, T>;

    #[inline]
    fn is_full(&self) -> bool {
        self.usage() == self.capacity()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.usage() == 0
    }

    #[inline]
    fn len(&self) -> usize {
        self.usage()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

pub(crate) fn write_summary<T, Q: GridQueue<T>>(queue: &Q, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let side = queue.side();
    write!(
        f,
        "queue {side}x{side}; capacity: {}; usage: {}; front: {}; back: {}",
        queue.capacity(),
        queue.usage(),
        queue.front(),
        queue.back()
    )
}

pub(crate) fn debug_summary<T, Q: GridQueue<T>>(
    name: &str,
    queue: &Q,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.debug_struct(name)
        .field("side", &queue.side())
        .field("capacity", &queue.capacity())
        .field("usage", &queue.usage())
        .field("front", &queue.front())
        .field("back", &queue.back())
        .finish()
}
