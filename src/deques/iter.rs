//! Iterators over a [`ChunkedDeque`].

use core::iter::FusedIterator;

use super::chunked_deque::ChunkedDeque;

/// Borrowing front-to-back iterator, created by [`ChunkedDeque::iter`].
///
/// Each step is one O(1) index mapping; the iterator never walks chunk links.
pub struct Iter<'a, T> {
    deque: &'a ChunkedDeque<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(deque: &'a ChunkedDeque<T>) -> Self {
        Self {
            deque,
            front: 0,
            back: deque.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.deque.get(self.front);
        self.front += 1;
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.deque.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Consuming iterator, created by `ChunkedDeque::into_iter`.
///
/// Yields elements by popping from the ends, so the usual rebalancing keeps every
/// step amortized O(1).  Elements not yielded are dropped with the iterator.
pub struct IntoIter<T> {
    deque: ChunkedDeque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(deque: ChunkedDeque<T>) -> Self {
        Self { deque }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.deque.len();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_front_to_back() {
        let mut d = ChunkedDeque::new();
        for i in 0..25 {
            d.push_front(i);
        }
        let v: Vec<_> = d.iter().copied().collect();
        assert_eq!(v, (0..25).rev().collect::<Vec<_>>());
        assert_eq!(d.iter().len(), 25);
    }

    #[test]
    fn test_iter_double_ended() {
        let d: ChunkedDeque<i32> = (0..13).collect();
        let mut it = d.iter();
        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.next_back(), Some(&12));
        assert_eq!(it.len(), 11);
        let rest: Vec<_> = it.rev().copied().collect();
        assert_eq!(rest, (1..12).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_iter_empty() {
        let d: ChunkedDeque<i32> = ChunkedDeque::new();
        assert_eq!(d.iter().next(), None);
        assert_eq!((&d).into_iter().next_back(), None);
    }

    #[test]
    fn test_iter_by_ref_loop() {
        let d: ChunkedDeque<i32> = (1..=4).collect();
        let mut sum = 0;
        for v in &d {
            sum += v;
        }
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_into_iter_both_ends() {
        let d: ChunkedDeque<String> = (0..30).map(|i| i.to_string()).collect();
        let mut it = d.into_iter();
        assert_eq!(it.next().as_deref(), Some("0"));
        assert_eq!(it.next_back().as_deref(), Some("29"));
        assert_eq!(it.len(), 28);
        let middle: Vec<_> = it.collect();
        assert_eq!(middle.len(), 28);
        assert_eq!(middle[0], "1");
        assert_eq!(middle[27], "28");
    }

    #[test]
    fn test_into_iter_partial_drops_rest() {
        let rc = std::rc::Rc::new(());
        let d: ChunkedDeque<_> = (0..20).map(|_| std::rc::Rc::clone(&rc)).collect();
        let mut it = d.into_iter();
        drop(it.next());
        drop(it);
        assert_eq!(std::rc::Rc::strong_count(&rc), 1);
    }
}
