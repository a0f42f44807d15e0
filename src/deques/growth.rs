//! Chunk-granularity growth: resize the tables and even out the chunk counts.
//!
//! Growth never touches element storage beyond reversing the slots of a chunk that
//! crosses the centre.  Chunk handles are moved, so the cost is proportional to the
//! number of chunks in use, not the number of elements.

use super::chunk::{CHUNK_SIZE, Chunk};
use super::table::{DualTable, Table};

impl<T> DualTable<T> {
    /// Replaces both tables with tables of `new_cap` chunk slots, moving chunk handles
    /// from the heavier side to the lighter one until the chunk counts are within one.
    ///
    /// Called with `2 * cap` when a push finds its side full, and with `cap` when a pop
    /// finds its side starved but the opposite side long enough that a chunk reshuffle
    /// beats a full rebalance.
    ///
    /// # Pseudo-code Implementation
    /// ```text
    /// lc, rc = chunk counts;  half = (lc + rc) / 2
    /// if lc > half: k = min(lc - half, full chunks on left)
    ///     right' = rev(left[0..k]) each reversed ++ right
    ///     left'  = left[k..]
    /// elif rc > half: mirror image
    /// else: left' = left, right' = right
    /// ```
    ///
    /// Only full chunks may cross: after the move the crossed chunk becomes an inner
    /// chunk of its new side, and every inner chunk must be full.
    pub(crate) fn regrow(&mut self, new_cap: usize) {
        let lc = self.left.chunk_count();
        let rc = self.right.chunk_count();
        let half = (lc + rc) / 2;
        let old_cap = self.cap;

        let (left, right, moved) = if lc > half {
            let k = (lc - half).min(self.left.full_chunks());
            let (to, from) = transfer(&mut self.right, &mut self.left, k, new_cap);
            (from, to, k)
        } else if rc > half {
            let k = (rc - half).min(self.right.full_chunks());
            let (to, from) = transfer(&mut self.left, &mut self.right, k, new_cap);
            (to, from, k)
        } else {
            (
                rehome(&mut self.left, new_cap),
                rehome(&mut self.right, new_cap),
                0,
            )
        };

        debug_assert!(left.chunk_count() <= new_cap && right.chunk_count() <= new_cap);
        self.left = left;
        self.right = right;
        self.cap = new_cap;

        tracing::trace!(
            old_cap,
            new_cap,
            moved,
            left = self.left.len,
            right = self.right.len,
            "regrow"
        );
    }
}

/// Moves the chunk handles of `table` into a fresh table of `new_cap` slots.
fn rehome<T>(table: &mut Table<T>, new_cap: usize) -> Table<T> {
    let mut out = Table::with_capacity(new_cap);
    out.chunks.extend(table.chunks.drain(..));
    out.len = table.len;
    table.len = 0;
    out
}

/// Moves the `k` innermost chunks of `from` onto the inner end of `to`, returning
/// fresh `(to, from)` tables of `new_cap` slots.
///
/// The innermost chunk of `from` must end up adjacent to the centre on the other
/// side, so the moved run is taken in reverse and every moved chunk has its slots
/// reversed to match the orientation of its new side.
fn transfer<T>(
    to: &mut Table<T>,
    from: &mut Table<T>,
    k: usize,
    new_cap: usize,
) -> (Table<T>, Table<T>) {
    let mut gained = Table::with_capacity(new_cap);
    gained
        .chunks
        .extend(from.chunks.drain(..k).rev().map(|mut chunk: Chunk<T>| {
            chunk.reverse();
            chunk
        }));
    gained.chunks.extend(to.chunks.drain(..));
    gained.len = to.len + k * CHUNK_SIZE;
    to.len = 0;

    let mut lost = rehome(from, new_cap);
    lost.len -= k * CHUNK_SIZE;
    (gained, lost)
}
