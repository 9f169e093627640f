use std::cmp::Ordering;

/// Selection sort: for each position, scan the unsorted suffix for its
/// minimum and swap it into place.
///
/// O(n²) compares regardless of input order — not adaptive.
///
/// # Examples
///
/// ```
/// use algo_ordering::natural;
/// use algo_sorting::selection_sort;
///
/// let mut data = [3, 1, 4, 1, 5];
/// selection_sort(natural::<i32>(), &mut data);
/// assert_eq!(data, [1, 1, 3, 4, 5]);
/// ```
pub fn selection_sort<T, F>(mut compare: F, a: &mut [T])
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 0..a.len() {
        let mut min = i;
        for j in i + 1..a.len() {
            if compare(&a[j], &a[min]) == Ordering::Less {
                min = j;
            }
        }
        a.swap(i, min);
    }
}
