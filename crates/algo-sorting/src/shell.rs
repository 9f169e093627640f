use std::cmp::Ordering;

/// Shell sort: insertion sort generalized to a shrinking gap sequence.
///
/// Gaps follow Knuth's `h = 3h + 1` sequence (1, 4, 13, 40, …), growing
/// while `h <= n / 3` and descending from the largest; at each gap,
/// elements `h` apart are compared and swapped.
///
/// # Examples
///
/// ```
/// use algo_ordering::natural;
/// use algo_sorting::shell_sort;
///
/// let mut data = [6, 5, 3, 1, 8, 7, 2, 4];
/// shell_sort(natural::<i32>(), &mut data);
/// assert_eq!(data, [1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
pub fn shell_sort<T, F>(mut compare: F, a: &mut [T])
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = a.len();
    let mut h = 1;
    while h <= n / 3 {
        h = 3 * h + 1;
    }
    while h >= 1 {
        for i in h..n {
            let mut j = i;
            while j >= h && compare(&a[j], &a[j - h]) == Ordering::Less {
                a.swap(j, j - h);
                j -= h;
            }
        }
        // descend the 3h + 1 sequence
        h /= 3;
        if h == 0 {
            break;
        }
    }
}
