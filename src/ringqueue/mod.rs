//! Cursor-based grid queue: O(1) enqueue and dequeue.
//!
//! Front and back are independent `(row, col)` cursors that advance
//! row-major and wrap on both axes, so values never move once written.

mod engine;

pub use engine::RingQueue;
