use std::cmp::Ordering;

/// Max-priority queue over an unordered array.
///
/// `insert` appends in O(1); [`del_max`](UnorderedMaxPq::del_max) scans
/// for the maximum, swaps it to the logical end and shrinks, O(n).
///
/// # Examples
///
/// ```
/// use algo_pqueue::UnorderedMaxPq;
///
/// let mut pq = UnorderedMaxPq::with_comparator(|a: &i32, b: &i32| a.cmp(b));
/// pq.insert(2);
/// pq.insert(9);
/// pq.insert(4);
/// assert_eq!(pq.del_max(), Some(9));
/// assert_eq!(pq.del_max(), Some(4));
/// assert_eq!(pq.del_max(), Some(2));
/// assert_eq!(pq.del_max(), None);
/// ```
pub struct UnorderedMaxPq<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pq: Vec<T>,
    compare: C,
}

impl<T, C> UnorderedMaxPq<T, C>
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
    }

    /// Remove and return the maximum, or `None` when empty.
    pub fn del_max(&mut self) -> Option<T> {
        if self.pq.is_empty() {
            return None;
        }
        let mut max = 0;
        for i in 1..self.pq.len() {
            if (self.compare)(&self.pq[max], &self.pq[i]) == Ordering::Less {
                max = i;
            }
        }
        let last = self.pq.len() - 1;
        self.pq.swap(max, last);
        self.pq.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pq.len()
    }
}
