//! Shifting grid queue, kept as the reference the ring queue is checked
//! against.
//!
//! The grid is treated as a flat buffer starting at `(0, 0)`. Dequeue moves
//! every remaining value one slot toward the front, so it costs O(usage).

mod engine;

pub use engine::ShiftQueue;
