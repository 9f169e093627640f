//! Heap re-balancing primitives over a raw backing slice.
//!
//! The heap is a 1-indexed logical view over 0-indexed storage: logical
//! position `k` lives at `slice[k - 1]`, its children at logical `2k` and
//! `2k + 1`, its parent at `k / 2`. Max-heap invariant: no parent compares
//! `Less` than either of its children.

use std::cmp::Ordering;

/// Bubble the item at logical position `k` up until its parent no longer
/// compares `Less` than it.
///
/// # Examples
///
/// ```
/// use algo_pqueue::swim;
///
/// // 9 was just appended below 5; one swim restores the heap
/// let mut heap = [8, 5, 7, 9];
/// swim(&|a: &i32, b: &i32| a.cmp(b), &mut heap, 4);
/// assert_eq!(heap, [9, 8, 7, 5]);
/// ```
pub fn swim<T, C>(compare: &C, pq: &mut [T], mut k: usize)
where
    C: Fn(&T, &T) -> Ordering,
{
    while k > 1 && compare(&pq[k / 2 - 1], &pq[k - 1]) == Ordering::Less {
        pq.swap(k / 2 - 1, k - 1);
        k /= 2;
    }
}

/// Sink the item at logical position `k` down through the first `n`
/// logical positions, at each level swapping with the larger child, until
/// neither child compares greater.
///
/// # Examples
///
/// ```
/// use algo_pqueue::sink;
///
/// // 1 was just swapped into the root; one sink restores the heap
/// let mut heap = [1, 8, 7, 5];
/// sink(&|a: &i32, b: &i32| a.cmp(b), &mut heap, 4, 1);
/// assert_eq!(heap, [8, 5, 7, 1]);
/// ```
pub fn sink<T, C>(compare: &C, pq: &mut [T], n: usize, mut k: usize)
where
    C: Fn(&T, &T) -> Ordering,
{
    while 2 * k <= n {
        // first child, then prefer the larger of the two
        let mut j = 2 * k;
        if j < n && compare(&pq[j - 1], &pq[j]) == Ordering::Less {
            j += 1;
        }
        if compare(&pq[k - 1], &pq[j - 1]) != Ordering::Less {
            break;
        }
        pq.swap(k - 1, j - 1);
        k = j;
    }
}
