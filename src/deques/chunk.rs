//! Fixed-size element blocks, the allocation unit of [`ChunkedDeque`](super::chunked_deque::ChunkedDeque).
//!
//! A [`Chunk`] is a boxed `heapless::Vec<T, CHUNK_SIZE>`.  The box makes the chunk a
//! *handle*: tables move chunks between slots (and between sides) by moving one pointer,
//! never the elements behind it.  Live slots are always the prefix `0..len`, so a chunk
//! grows and shrinks only at its end.

use heapless::Vec as HVec;

/// Number of element slots in every chunk.
pub const CHUNK_SIZE: usize = 10;

/// Chunk slots allocated per side by the first insertion into an unallocated deque.
pub const DEFAULT_CAPACITY: usize = 1;

/// Opposite-side element count at which a starved pop switches from a full
/// element rebalance to a chunk-level regrow.
pub const TWO_CHUNKS: usize = 2 * CHUNK_SIZE + 1;

/// A heap-allocated block of up to [`CHUNK_SIZE`] elements.
///
/// # Pseudo-code Implementation
/// ```text
/// // 1. Push (push)
/// if slots.len() == CHUNK_SIZE: unreachable (the owning table checks first)
/// slots[len] = value
///
/// // 2. Flip orientation (reverse)
/// slots[0..len].reverse()   // O(CHUNK_SIZE), used when a chunk crosses the centre
/// ```
pub(crate) struct Chunk<T> {
    slots: Box<HVec<T, CHUNK_SIZE>>,
}

impl<T> Chunk<T> {
    /// Allocates an empty chunk.
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            slots: Box::new(HVec::new()),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline(always)]
    pub(crate) fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// Appends `value` to the next free slot.
    ///
    /// # Panics
    /// Panics if the chunk is already full; the owning table allocates a new
    /// chunk before that can happen.
    #[inline]
    pub(crate) fn push(&mut self, value: T) {
        if self.slots.push(value).is_err() {
            unreachable!("Logic Error: push into a full chunk");
        }
    }

    /// Removes the element in the highest live slot.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.slots.pop()
    }

    #[inline(always)]
    pub(crate) fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot)
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.slots.get_mut(slot)
    }

    /// Reverses the order of the live slots in place.
    #[inline]
    pub(crate) fn reverse(&mut self) {
        self.slots.reverse();
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[T] {
        self.slots.as_slice()
    }

    /// Consumes the chunk, yielding its elements from slot 0 upward.
    pub(crate) fn into_values(self) -> impl Iterator<Item = T> {
        (*self.slots).into_iter()
    }
}

impl<T: Clone> Clone for Chunk<T> {
    /// Clones every live element into a freshly allocated chunk.
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}
