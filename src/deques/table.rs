//! The two chunk tables behind a [`ChunkedDeque`](super::chunked_deque::ChunkedDeque) and the
//! logical-index mapping across them.
//!
//! ```text
//!   logical:   front ──────────────────────────────────────────────▶ back
//!              [ L(l-1) … L(1) L(0) | R(0) R(1) … R(r-1) ]
//!
//!   left  table: chunk 0 holds L(0..C), chunk 1 holds L(C..2C), …
//!   right table: chunk 0 holds R(0..C), chunk 1 holds R(C..2C), …
//! ```
//!
//! Both sides grow *outward* from the centre, so pushing at either end is an append
//! to one side's last chunk and popping is a truncate of it.

use super::chunk::{CHUNK_SIZE, Chunk};

/// Which of the two tables an element lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// One side of the deque: a table of chunk handles plus its element count.
///
/// Positions are counted from the centre outward.  Chunk `i` holds positions
/// `i * CHUNK_SIZE .. (i + 1) * CHUNK_SIZE`; every chunk but the last is full and
/// there are exactly `ceil(len / CHUNK_SIZE)` chunks.
pub(crate) struct Table<T> {
    pub(crate) chunks: Vec<Chunk<T>>,
    pub(crate) len: usize,
}

impl<T> Table<T> {
    /// Allocates an empty table with room for `cap` chunk handles.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            chunks: Vec::with_capacity(cap),
            len: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of populated chunks on this side.
    #[inline(always)]
    pub(crate) fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Number of leading chunks that are completely filled.
    #[inline(always)]
    pub(crate) fn full_chunks(&self) -> usize {
        self.len / CHUNK_SIZE
    }

    #[inline(always)]
    pub(crate) fn get(&self, pos: usize) -> Option<&T> {
        self.chunks.get(pos / CHUNK_SIZE)?.get(pos % CHUNK_SIZE)
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.chunks.get_mut(pos / CHUNK_SIZE)?.get_mut(pos % CHUNK_SIZE)
    }

    /// Writes `value` at position `len`, allocating a chunk when the last one is full.
    pub(crate) fn push(&mut self, value: T) {
        match self.chunks.last_mut() {
            Some(chunk) if !chunk.is_full() => chunk.push(value),
            _ => {
                let mut chunk = Chunk::new();
                chunk.push(value);
                self.chunks.push(chunk);
            }
        }
        self.len += 1;
    }

    /// Moves the outermost element out, releasing its chunk if it was the last one in it.
    pub(crate) fn pop(&mut self) -> Option<T> {
        let chunk = self.chunks.last_mut()?;
        let value = chunk.pop()?;
        if chunk.is_empty() {
            self.chunks.pop();
        }
        self.len -= 1;
        Some(value)
    }

    /// Consumes the table, yielding elements from the outermost position inward.
    pub(crate) fn into_outside_in(self) -> impl Iterator<Item = T> {
        self.chunks.into_iter().rev().flat_map(|mut chunk| {
            chunk.reverse();
            chunk.into_values()
        })
    }

    /// Consumes the table, yielding elements from the centre outward.
    pub(crate) fn into_inside_out(self) -> impl Iterator<Item = T> {
        self.chunks.into_iter().flat_map(Chunk::into_values)
    }
}

/// The pair of tables plus the shared per-side chunk capacity.
///
/// The left table stores the front half of the sequence reversed, the right table
/// stores the back half in order.  `cap` is the number of chunk slots allocated per
/// side; both sides always have the same `cap`.
pub(crate) struct DualTable<T> {
    pub(crate) left: Table<T>,
    pub(crate) right: Table<T>,
    pub(crate) cap: usize,
}

impl<T> DualTable<T> {
    /// Unallocated tables (`cap == 0`).
    pub(crate) const fn new() -> Self {
        Self {
            left: Table {
                chunks: Vec::new(),
                len: 0,
            },
            right: Table {
                chunks: Vec::new(),
                len: 0,
            },
            cap: 0,
        }
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            left: Table::with_capacity(cap),
            right: Table::with_capacity(cap),
            cap,
        }
    }

    /// Logical size: `left.len + right.len`.
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.left.len + self.right.len
    }

    /// Elements a single side can hold before it must grow.
    #[inline(always)]
    pub(crate) fn side_capacity(&self) -> usize {
        CHUNK_SIZE * self.cap
    }

    #[inline(always)]
    pub(crate) fn side(&self, side: Side) -> &Table<T> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    #[inline(always)]
    pub(crate) fn side_mut(&mut self, side: Side) -> &mut Table<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Maps logical `index` to a side and a position within that side.
    ///
    /// Indices past the end map to a right position past `right.len`.
    #[inline(always)]
    pub(crate) fn locate(&self, index: usize) -> (Side, usize) {
        if index < self.left.len {
            (Side::Left, self.left.len - 1 - index)
        } else {
            (Side::Right, index - self.left.len)
        }
    }

    #[inline(always)]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        let (side, pos) = self.locate(index);
        self.side(side).get(pos)
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let (side, pos) = self.locate(index);
        self.side_mut(side).get_mut(pos)
    }

    /// Consumes both tables, yielding every element front to back.
    pub(crate) fn into_logical(self) -> impl Iterator<Item = T> {
        self.left
            .into_outside_in()
            .chain(self.right.into_inside_out())
    }

    /// Builds tables holding `values` front to back with the first `left` on the left side.
    #[cfg(test)]
    pub(crate) fn from_split(values: &[T], left: usize, cap: usize) -> Self
    where
        T: Clone,
    {
        let mut t = Self::with_capacity(cap);
        for v in values[..left].iter().rev() {
            t.left.push(v.clone());
        }
        for v in &values[left..] {
            t.right.push(v.clone());
        }
        t
    }

    #[cfg(test)]
    pub(crate) fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        (0..self.len()).filter_map(|i| self.get(i).cloned()).collect()
    }

    /// Asserts the structural invariants of both sides.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        for table in [&self.left, &self.right] {
            assert!(table.len <= self.side_capacity(), "side over capacity");
            assert_eq!(table.chunks.len(), table.len.div_ceil(CHUNK_SIZE));
            let mut seen = 0;
            for (i, chunk) in table.chunks.iter().enumerate() {
                if i + 1 < table.chunks.len() {
                    assert!(chunk.is_full(), "inner chunk {i} not full");
                }
                assert!(!chunk.is_empty(), "empty chunk kept at {i}");
                seen += chunk.len();
            }
            assert_eq!(seen, table.len);
        }
    }
}

impl<T: Clone> Clone for DualTable<T> {
    /// Clones every chunk element-wise, keeping the layout and `cap`.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.cap);
        out.left.chunks.extend(self.left.chunks.iter().cloned());
        out.left.len = self.left.len;
        out.right.chunks.extend(self.right.chunks.iter().cloned());
        out.right.len = self.right.len;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_push_allocates_chunks_lazily() {
        let mut t = Table::with_capacity(4);
        assert_eq!(t.chunk_count(), 0);
        t.push(0);
        assert_eq!(t.chunk_count(), 1);
        for i in 1..CHUNK_SIZE {
            t.push(i);
        }
        assert_eq!(t.chunk_count(), 1);
        assert_eq!(t.full_chunks(), 1);
        t.push(CHUNK_SIZE);
        assert_eq!(t.chunk_count(), 2);
        assert_eq!(t.get(CHUNK_SIZE), Some(&CHUNK_SIZE));
    }

    #[test]
    fn test_table_pop_releases_chunks() {
        let mut t = Table::with_capacity(2);
        for i in 0..=CHUNK_SIZE {
            t.push(i);
        }
        assert_eq!(t.pop(), Some(CHUNK_SIZE));
        assert_eq!(t.chunk_count(), 1);
        for _ in 0..CHUNK_SIZE {
            t.pop();
        }
        assert!(t.is_empty());
        assert_eq!(t.chunk_count(), 0);
        assert_eq!(t.pop(), None);
    }

    #[test]
    fn test_table_drain_orders() {
        let mut t = Table::with_capacity(2);
        for i in 0..13 {
            t.push(i);
        }
        let out: Vec<_> = t.into_outside_in().collect();
        assert_eq!(out, (0..13).rev().collect::<Vec<_>>());

        let mut t = Table::with_capacity(2);
        for i in 0..13 {
            t.push(i);
        }
        let inward: Vec<_> = t.into_inside_out().collect();
        assert_eq!(inward, (0..13).collect::<Vec<_>>());
    }

    #[test]
    fn test_dual_table_index_mapping() {
        let values: Vec<i32> = (0..25).collect();
        let t = DualTable::from_split(&values, 12, 2);
        t.check_invariants();
        assert_eq!(t.locate(0), (Side::Left, 11));
        assert_eq!(t.locate(11), (Side::Left, 0));
        assert_eq!(t.locate(12), (Side::Right, 0));
        assert_eq!(t.locate(24), (Side::Right, 12));
        assert_eq!(t.to_vec(), values);
        assert_eq!(t.get(25), None);
    }

    #[test]
    fn test_dual_table_single_left_element() {
        let t = DualTable::from_split(&[7], 1, 1);
        assert_eq!(t.locate(0), (Side::Left, 0));
        assert_eq!(t.get(0), Some(&7));
    }

    #[test]
    fn test_dual_table_all_right() {
        let t = DualTable::from_split(&[1, 2, 3], 0, 1);
        assert_eq!(t.locate(0), (Side::Right, 0));
        assert_eq!(t.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_dual_table_get_mut() {
        let mut t = DualTable::from_split(&[1, 2, 3, 4], 2, 1);
        *t.get_mut(0).unwrap() = 10;
        *t.get_mut(3).unwrap() = 40;
        assert_eq!(t.to_vec(), vec![10, 2, 3, 40]);
    }

    #[test]
    fn test_dual_table_into_logical() {
        let values: Vec<i32> = (0..31).collect();
        let t = DualTable::from_split(&values, 17, 2);
        assert_eq!(t.into_logical().collect::<Vec<_>>(), values);
    }

    #[test]
    fn test_dual_table_clone_keeps_layout() {
        let values: Vec<i32> = (0..15).collect();
        let t = DualTable::from_split(&values, 4, 2);
        let c = t.clone();
        c.check_invariants();
        assert_eq!(c.cap, 2);
        assert_eq!(c.left.len(), 4);
        assert_eq!(c.right.len(), 11);
        assert_eq!(c.to_vec(), values);
    }
}
