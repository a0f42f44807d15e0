//! Error type shared by the deque operations.

use thiserror::Error;

/// Failure reported by the peek and pop operations of a deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DequeError {
    /// The operation needs at least one element but the deque is empty.
    #[error("no such element: deque is empty")]
    EmptyContainer,
}
