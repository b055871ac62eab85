use thiserror::Error;

/// Errors raised while building a grid queue.
///
/// Full and empty conditions are not errors: `enqueue` reports a full queue
/// by returning `false`, `dequeue`/`peek` report an empty one with `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridQueueError {
    #[error("invalid grid side {side}: capacity side*side must be a positive usize")]
    InvalidCapacity { side: usize },
}
