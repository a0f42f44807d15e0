//! Element-granularity rebalance ("centerize").
//!
//! When a pop would starve one side while the other side is short (fewer than
//! [`TWO_CHUNKS`](super::TWO_CHUNKS) elements), the deque rebuilds both sides from
//! scratch with the elements split evenly around the centre.  The rebuild moves every
//! element once, but the trigger bounds the element count, so a sequence of pops stays
//! amortized O(1).

use super::TWO_CHUNKS;
use super::table::{DualTable, Side, Table};

impl<T> DualTable<T> {
    /// Redistributes all elements evenly: the front `total - total / 2` go to a fresh
    /// left table, the remaining `total / 2` to a fresh right table.  `cap` is kept.
    ///
    /// # Pseudo-code Implementation
    /// ```text
    /// seq        = left (outside-in) ++ right (inside-out)    // front → back
    /// right_half = len / 2;  left_half = len - right_half
    /// left'      = seq[0..left_half] reversed                 // position 0 next to centre
    /// right'     = seq[left_half..]
    /// ```
    pub(crate) fn centerize(&mut self) {
        let total = self.len();
        let right_half = total / 2;
        let left_half = total - right_half;

        let cap = self.cap;
        let old = core::mem::replace(self, Self::with_capacity(cap));
        let mut front: Vec<T> = old.into_logical().collect();
        let back = front.split_off(left_half);

        for value in front.into_iter().rev() {
            self.left.push(value);
        }
        for value in back {
            self.right.push(value);
        }

        tracing::debug!(total, left = left_half, right = right_half, "centerize");
    }

    /// Restores a usable layout before popping from `side`.
    ///
    /// A pop needs at least two elements on its own side, or the element at the far
    /// end of the other side would have to be removed.  When the opposite side is short
    /// the elements are rebalanced one by one; otherwise whole chunks are moved across
    /// without resizing.
    pub(crate) fn prepare_pop(&mut self, side: Side) {
        let (this, other) = match side {
            Side::Left => (self.left.len(), self.right.len()),
            Side::Right => (self.right.len(), self.left.len()),
        };
        if this > 1 {
            return;
        }
        if other < TWO_CHUNKS {
            self.centerize();
        } else {
            self.regrow(self.cap);
        }
    }

    /// Removes the logical element at the `side` end of the sequence.
    ///
    /// Must follow [`prepare_pop`](Self::prepare_pop).  After it, the pop side is only
    /// empty when a single element remains, and that element sits at left position 0.
    pub(crate) fn pop_end(&mut self, side: Side) -> Option<T> {
        let table: &mut Table<T> = if self.side(side).is_empty() {
            debug_assert_eq!(self.len(), 1);
            &mut self.left
        } else {
            self.side_mut(side)
        };
        table.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deques::CHUNK_SIZE;

    fn values(n: i32) -> Vec<i32> {
        (0..n).collect()
    }

    #[test]
    fn test_rebalance_centerize_even_split() {
        let v = values(12);
        let mut t = DualTable::from_split(&v, 1, 2);
        t.centerize();
        t.check_invariants();
        assert_eq!(t.left.len(), 6);
        assert_eq!(t.right.len(), 6);
        assert_eq!(t.to_vec(), v);
    }

    #[test]
    fn test_rebalance_centerize_odd_total_favours_left() {
        let v = values(7);
        let mut t = DualTable::from_split(&v, 7, 1);
        t.centerize();
        t.check_invariants();
        assert_eq!(t.left.len(), 4);
        assert_eq!(t.right.len(), 3);
        assert_eq!(t.to_vec(), v);
    }

    #[test]
    fn test_rebalance_centerize_single_element_goes_left() {
        let mut t = DualTable::from_split(&[42], 0, 1);
        t.centerize();
        assert_eq!(t.left.len(), 1);
        assert_eq!(t.right.len(), 0);
        assert_eq!(t.left.get(0), Some(&42));
    }

    #[test]
    fn test_rebalance_centerize_keeps_capacity() {
        let v = values(20);
        let mut t = DualTable::from_split(&v, 0, 4);
        t.centerize();
        assert_eq!(t.cap, 4);
        assert_eq!(t.left.len(), 10);
        assert_eq!(t.to_vec(), v);
    }

    #[test]
    fn test_rebalance_prepare_pop_centerizes_short_side() {
        let v = values(CHUNK_SIZE as i32 + 5);
        let mut t = DualTable::from_split(&v, 1, 2);
        t.prepare_pop(Side::Left);
        t.check_invariants();
        assert_eq!(t.left.len(), 8);
        assert_eq!(t.right.len(), 7);
        assert_eq!(t.to_vec(), v);
    }

    #[test]
    fn test_rebalance_prepare_pop_regrows_long_side() {
        let v = values(TWO_CHUNKS as i32 + 1);
        let mut t = DualTable::from_split(&v, 22, 3);
        t.prepare_pop(Side::Right);
        t.check_invariants();
        assert_eq!(t.cap, 3);
        assert_eq!(t.left.len(), 2);
        assert_eq!(t.right.len(), 20);
        assert_eq!(t.to_vec(), v);
    }

    #[test]
    fn test_rebalance_prepare_pop_no_op_when_side_has_room() {
        let v = values(6);
        let mut t = DualTable::from_split(&v, 3, 1);
        t.prepare_pop(Side::Right);
        assert_eq!(t.left.len(), 3);
        assert_eq!(t.right.len(), 3);
    }

    #[test]
    fn test_rebalance_pop_end_last_element() {
        let mut t = DualTable::from_split(&[9], 0, 1);
        t.prepare_pop(Side::Right);
        assert_eq!(t.pop_end(Side::Right), Some(9));
        assert_eq!(t.len(), 0);
    }
}
