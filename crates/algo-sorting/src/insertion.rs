use std::cmp::Ordering;

/// Insertion sort: bubble each item left while its left neighbour compares
/// `Greater`.
///
/// O(n²) worst case but adaptive — nearly-sorted input is close to O(n),
/// which is why the hybrid merge sort hands short runs to
/// [`insertion_sort_range`].
///
/// # Examples
///
/// ```
/// use algo_ordering::natural;
/// use algo_sorting::insertion_sort;
///
/// let mut data = [3, 1, 4, 1, 5];
/// insertion_sort(natural::<i32>(), &mut data);
/// assert_eq!(data, [1, 1, 3, 4, 5]);
/// ```
pub fn insertion_sort<T, F>(mut compare: F, a: &mut [T])
where
    F: FnMut(&T, &T) -> Ordering,
{
    if a.is_empty() {
        return;
    }
    insertion_sort_range(&mut compare, a, 0, a.len() - 1);
}

/// Insertion-sort the inclusive range `[lo, hi]` in place, leaving the
/// rest of the slice untouched.
pub fn insertion_sort_range<T, F>(compare: &mut F, a: &mut [T], lo: usize, hi: usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in lo..=hi {
        let mut j = i;
        while j > lo && compare(&a[j], &a[j - 1]) == Ordering::Less {
            a.swap(j, j - 1);
            j -= 1;
        }
    }
}
