//! Double-ended queue stored as two tables of fixed-size chunks.
//!
//! # Layout
//! The sequence is split at a movable *centre*.  Elements in front of it live in the
//! left table in reverse order, elements behind it live in the right table in order,
//! so both ends of the deque are the *ends* of a table and push/pop never shift data.
//! Random access maps a logical index to `(side, position)` arithmetically.
//!
//! # Cost model
//! | Operation               | Cost                                   |
//! |-------------------------|----------------------------------------|
//! | `push_back/push_front`  | amortized O(1) (table doubling)        |
//! | `pop_back/pop_front`    | amortized O(1) (chunk or element rebalance) |
//! | `at/get/front/back`     | O(1)                                   |
//! | `clear`                 | O(n)                                   |
//!
//! Growing a table moves chunk *handles*, never elements.  When a pop starves one side,
//! the deque either moves whole chunks across the centre (the opposite side is long) or
//! rebuilds a short deque element by element (see
//! [`TWO_CHUNKS`](crate::deques::TWO_CHUNKS)).
//!
//! # First insertion
//! A push into an empty deque always stores the element on the **left** side,
//! whichever end was requested.  The element is both front and back, so this is not
//! observable through the sequence API, only through which side allocates first.

use core::fmt;
use core::ops::{Index, IndexMut};

use super::chunk::{CHUNK_SIZE, DEFAULT_CAPACITY};
use super::iter::{IntoIter, Iter};
use super::table::{DualTable, Side};
use crate::error::DequeError;

/// A double-ended queue with amortized O(1) operations at both ends and O(1)
/// random access, built from two growable tables of [`CHUNK_SIZE`]-element chunks.
///
/// # Pseudo-code Implementation
/// ```text
/// // 1. Push back (push_back)           push_front mirrors it on the left side
/// if cap == 0: regrow(DEFAULT_CAPACITY)
/// if len == 0: left.push(v); return     // first element always goes left
/// if right.len == C * cap: regrow(2 * cap)
/// right.push(v)
///
/// // 2. Pop back (pop_back)             pop_front mirrors it on the left side
/// if len == 0: return Err(EmptyContainer)
/// if right.len <= 1:
///     if left.len < TWO_CHUNKS: centerize()   // element-wise, small deque
///     else:                    regrow(cap)   // chunk-wise, same capacity
/// return right.pop() or left.pop()            // the latter only when len == 1
///
/// // 3. Access (at)
/// if i < left.len: left[left.len - 1 - i] else right[i - left.len]
/// ```
pub struct ChunkedDeque<T> {
    table: DualTable<T>,
}

impl<T> ChunkedDeque<T> {
    /// Creates an empty deque.  Nothing is allocated until the first push.
    pub const fn new() -> Self {
        Self {
            table: DualTable::new(),
        }
    }

    /// Creates an empty deque with `chunks` chunk slots allocated per side.
    pub fn with_capacity(chunks: usize) -> Self {
        Self {
            table: DualTable::with_capacity(chunks),
        }
    }

    /// Returns the number of elements in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the deque can hold across both sides without
    /// growing its tables: `2 * CHUNK_SIZE * chunk_capacity()`.
    ///
    /// A single side may still grow before the total is reached.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        2 * CHUNK_SIZE * self.table.cap
    }

    /// Returns the number of chunk slots allocated per side.
    #[inline(always)]
    pub fn chunk_capacity(&self) -> usize {
        self.table.cap
    }

    /// Appends `value` to the back of the deque.
    pub fn push_back(&mut self, value: T) {
        self.push(Side::Right, value);
    }

    /// Prepends `value` to the front of the deque.
    pub fn push_front(&mut self, value: T) {
        self.push(Side::Left, value);
    }

    fn push(&mut self, side: Side, value: T) {
        if self.table.cap == 0 {
            self.table.regrow(DEFAULT_CAPACITY);
        }
        if self.is_empty() {
            self.table.left.push(value);
            return;
        }
        if self.table.side(side).len() == self.table.side_capacity() {
            self.table.regrow(self.table.cap * 2);
        }
        self.table.side_mut(side).push(value);
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        self.pop(Side::Right)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        self.pop(Side::Left)
    }

    fn pop(&mut self, side: Side) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyContainer);
        }
        self.table.prepare_pop(side);
        self.table.pop_end(side).ok_or(DequeError::EmptyContainer)
    }

    /// Returns a shared reference to the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    #[inline]
    pub fn front(&self) -> Result<&T, DequeError> {
        self.get(0).ok_or(DequeError::EmptyContainer)
    }

    /// Returns a shared reference to the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    #[inline]
    pub fn back(&self) -> Result<&T, DequeError> {
        self.len()
            .checked_sub(1)
            .and_then(|last| self.get(last))
            .ok_or(DequeError::EmptyContainer)
    }

    /// Returns an exclusive reference to the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, DequeError> {
        self.get_mut(0).ok_or(DequeError::EmptyContainer)
    }

    /// Returns an exclusive reference to the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, DequeError> {
        match self.len().checked_sub(1) {
            Some(last) => self.get_mut(last).ok_or(DequeError::EmptyContainer),
            None => Err(DequeError::EmptyContainer),
        }
    }

    /// Returns a shared reference to the element at logical `index`, or `None`.
    ///
    /// Logical index 0 is the front.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.table.get(index)
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.table.get_mut(index)
    }

    /// Returns a shared reference to the element at logical `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`; callers are expected to bound-check.
    #[inline]
    pub fn at(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(value) => value,
            None => out_of_bounds(index, len),
        }
    }

    /// Returns an exclusive reference to the element at logical `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => out_of_bounds(index, len),
        }
    }

    /// Drops every element and releases all chunks and both tables.
    ///
    /// The deque returns to its unallocated state (`chunk_capacity() == 0`).
    pub fn clear(&mut self) {
        self.table = DualTable::new();
    }

    /// Returns a front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

#[cold]
#[inline(never)]
fn out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

impl<T> Default for ChunkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ChunkedDeque<T> {
    /// Clones every element into freshly allocated chunks with the same layout.
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<T> Index<usize> for ChunkedDeque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T> IndexMut<usize> for ChunkedDeque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index)
    }
}

impl<T: fmt::Debug> fmt::Debug for ChunkedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ChunkedDeque<T> {
    /// Compares the logical sequences; the split between the sides is irrelevant.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ChunkedDeque<T> {}

impl<T> Extend<T> for ChunkedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for ChunkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> IntoIterator for ChunkedDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a ChunkedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
