//! Fixed-capacity FIFO queues stored on an N x N grid.

pub mod error;
pub mod grid;
pub mod queue;
pub mod ringqueue;
pub mod shiftqueue;

pub use error::GridQueueError;
pub use grid::{Coord, Iter};
pub use queue::GridQueue;
pub use ringqueue::RingQueue;
pub use shiftqueue::ShiftQueue;
