use std::cmp::Ordering;

use crate::heap::{sink, swim};

/// Max-priority queue over an implicit binary heap.
///
/// Storage is a plain `Vec` read through the 1-indexed logical view of
/// [`crate::heap`]. `insert` appends and swims the new item up;
/// [`del_max`](BinaryHeapPq::del_max) swaps the root with the last item,
/// shrinks, and sinks the new root. Both are O(log n).
///
/// # Examples
///
/// ```
/// use algo_pqueue::BinaryHeapPq;
///
/// let mut pq = BinaryHeapPq::with_comparator(|a: &i32, b: &i32| a.cmp(b));
/// for v in [2, 9, 4, 9] {
///     pq.insert(v);
/// }
/// assert_eq!(pq.del_max(), Some(9));
/// assert_eq!(pq.del_max(), Some(9));
/// assert_eq!(pq.del_max(), Some(4));
/// ```
pub struct BinaryHeapPq<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pq: Vec<T>,
    compare: C,
}

impl<T, C> BinaryHeapPq<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(compare: C) -> Self {
        Self {
            pq: Vec::new(),
            compare,
        }
    }

    pub fn insert(&mut self, value: T) {
        self.pq.push(value);
        let n = self.pq.len();
        swim(&self.compare, &mut self.pq, n);
    }

    /// Remove and return the maximum, or `None` when empty.
    pub fn del_max(&mut self) -> Option<T> {
        let n = self.pq.len();
        if n == 0 {
            return None;
        }
        self.pq.swap(0, n - 1);
        let max = self.pq.pop();
        sink(&self.compare, &mut self.pq, n - 1, 1);
        max
    }

    pub fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pq.len()
    }

    /// Backing storage in heap order; logical position `k` is `[k - 1]`.
    pub fn as_slice(&self) -> &[T] {
        &self.pq
    }
}
