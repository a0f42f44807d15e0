//! Backend-agnostic deque interface.

use std::collections::VecDeque;

use super::chunked_deque::ChunkedDeque;
use crate::error::DequeError;

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by both `VecDeque<T>` (ring buffer) and [`ChunkedDeque<T>`] (chunk
/// tables) so that code can operate on a deque without knowing its storage.  Peeks and
/// pops on an empty deque report [`DequeError::EmptyContainer`].
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, item: T);
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T);
    /// Removes and returns the element from the back.
    fn pop_back(&mut self) -> Result<T, DequeError>;
    /// Removes and returns the element from the front.
    fn pop_front(&mut self) -> Result<T, DequeError>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the front element.
    fn front(&self) -> Result<&T, DequeError>;
    /// Returns a shared reference to the back element.
    fn back(&self) -> Result<&T, DequeError>;
    /// Returns a shared reference to the element at logical `index`, or `None`.
    fn get(&self, index: usize) -> Option<&T>;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Result<T, DequeError> {
        self.pop_back().ok_or(DequeError::EmptyContainer)
    }
    fn pop_front(&mut self) -> Result<T, DequeError> {
        self.pop_front().ok_or(DequeError::EmptyContainer)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Result<&T, DequeError> {
        self.front().ok_or(DequeError::EmptyContainer)
    }
    fn back(&self) -> Result<&T, DequeError> {
        self.back().ok_or(DequeError::EmptyContainer)
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> AnyDeque<T> for ChunkedDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Result<T, DequeError> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Result<T, DequeError> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Result<&T, DequeError> {
        self.front()
    }
    fn back(&self) -> Result<&T, DequeError> {
        self.back()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives any backend through the same script and returns what it observed.
    fn run_script(d: &mut dyn AnyDeque<i32>) -> Vec<Result<i32, DequeError>> {
        let mut seen = Vec::new();
        seen.push(d.pop_front());
        for i in 0..40 {
            if i % 4 == 0 {
                d.push_front(i);
            } else {
                d.push_back(i);
            }
        }
        seen.push(d.front().copied());
        seen.push(d.back().copied());
        for _ in 0..25 {
            seen.push(d.pop_back());
        }
        for _ in 0..20 {
            seen.push(d.pop_front());
        }
        seen.push(d.get(0).copied().ok_or(DequeError::EmptyContainer));
        seen
    }

    #[test]
    fn test_any_deque_backends_agree() {
        let mut chunked: ChunkedDeque<i32> = ChunkedDeque::new();
        let mut ring: VecDeque<i32> = VecDeque::new();
        assert_eq!(run_script(&mut chunked), run_script(&mut ring));
        assert!(AnyDeque::is_empty(&chunked));
    }

    #[test]
    fn test_any_deque_trait_dispatch() {
        let mut d: ChunkedDeque<i32> = ChunkedDeque::new();
        let any: &mut dyn AnyDeque<i32> = &mut d;
        any.push_back(10);
        any.push_front(5);
        assert_eq!(any.len(), 2);
        assert!(!any.is_empty());
        assert_eq!(any.front(), Ok(&5));
        assert_eq!(any.back(), Ok(&10));
        assert_eq!(any.pop_front(), Ok(5));
        any.clear();
        assert!(any.is_empty());
        assert_eq!(any.back(), Err(DequeError::EmptyContainer));
    }
}
