use std::cmp::Ordering;

use algo_ordering::is_sorted_range;

use crate::insertion::insertion_sort_range;

/// Runs at most this long are handed to insertion sort by
/// [`merge_sort_with_insertion`].
const CUTOFF: usize = 8;

/// Merge the two sorted halves `[lo, mid]` and `[mid + 1, hi]` of `a`
/// into one sorted range, using `aux` as scratch space.
///
/// The range is first copied into `aux`, then interleaved back by taking
/// from whichever half's head is not exhausted or compares no greater.
/// Ties prefer the left half, which is what makes every merge sort here
/// stable. Both halves being sorted on entry is checked only by debug
/// assertions.
pub fn merge<T, F>(compare: &mut F, a: &mut [T], aux: &mut [T], lo: usize, mid: usize, hi: usize)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(is_sorted_range(&mut *compare, a, lo, mid));
    debug_assert!(is_sorted_range(&mut *compare, a, mid + 1, hi));

    aux[lo..=hi].clone_from_slice(&a[lo..=hi]);

    let mut i = lo;
    let mut j = mid + 1;
    for k in lo..=hi {
        if i > mid {
            a[k] = aux[j].clone();
            j += 1;
        } else if j > hi {
            a[k] = aux[i].clone();
            i += 1;
        } else if compare(&aux[j], &aux[i]) == Ordering::Less {
            a[k] = aux[j].clone();
            j += 1;
        } else {
            a[k] = aux[i].clone();
            i += 1;
        }
    }
}

/// Top-down recursive merge sort. Stable, O(n log n), allocates one
/// auxiliary buffer the size of the input.
///
/// # Examples
///
/// ```
/// use algo_ordering::natural;
/// use algo_sorting::merge_sort;
///
/// let mut data = vec![38, 27, 43, 3, 9, 82, 10];
/// merge_sort(natural::<i32>(), &mut data);
/// assert_eq!(data, vec![3, 9, 10, 27, 38, 43, 82]);
/// ```
pub fn merge_sort<T, F>(mut compare: F, a: &mut [T])
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if a.len() < 2 {
        return;
    }
    let mut aux = a.to_vec();
    let hi = a.len() - 1;
    sort(&mut compare, a, &mut aux, 0, hi);
}

fn sort<T, F>(compare: &mut F, a: &mut [T], aux: &mut [T], lo: usize, hi: usize)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if hi <= lo {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort(compare, a, aux, lo, mid);
    sort(compare, a, aux, mid + 1, hi);
    merge(compare, a, aux, lo, mid, hi);
}

/// Bottom-up merge sort: iterate doubling block sizes instead of
/// recursing, merging adjacent block pairs. Stable; the variant to pick
/// when bounded stack depth matters.
///
/// # Examples
///
/// ```
/// use algo_ordering::natural;
/// use algo_sorting::merge_sort_bottom_up;
///
/// let mut data = vec![5, 1, 4, 2, 3];
/// merge_sort_bottom_up(natural::<i32>(), &mut data);
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn merge_sort_bottom_up<T, F>(mut compare: F, a: &mut [T])
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = a.len();
    if n < 2 {
        return;
    }
    let mut aux = a.to_vec();
    let mut size = 1;
    while size < n {
        let mut lo = 0;
        while lo < n - size {
            let mid = lo + size - 1;
            let hi = usize::min(lo + 2 * size - 1, n - 1);
            merge(&mut compare, a, &mut aux, lo, mid, hi);
            lo += 2 * size;
        }
        size *= 2;
    }
}

/// Top-down merge sort that insertion-sorts runs of at most eight
/// elements instead of recursing all the way down. Same contract as
/// [`merge_sort`], fewer tiny merges.
pub fn merge_sort_with_insertion<T, F>(mut compare: F, a: &mut [T])
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if a.len() < 2 {
        return;
    }
    let mut aux = a.to_vec();
    let hi = a.len() - 1;
    sort_with_cutoff(&mut compare, a, &mut aux, 0, hi);
}

fn sort_with_cutoff<T, F>(compare: &mut F, a: &mut [T], aux: &mut [T], lo: usize, hi: usize)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if hi <= lo + CUTOFF - 1 {
        insertion_sort_range(compare, a, lo, hi);
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_with_cutoff(compare, a, aux, lo, mid);
    sort_with_cutoff(compare, a, aux, mid + 1, hi);
    merge(compare, a, aux, lo, mid, hi);
}

#[cfg(test)]
mod tests {
    use super::*;
    use algo_ordering::{is_sorted, natural};

    #[test]
    fn test_merge_interleaves_sorted_halves() {
        let mut a = [1, 4, 7, 2, 3, 9];
        let mut aux = a.to_vec();
        merge(&mut natural::<i32>(), &mut a, &mut aux, 0, 2, 5);
        assert_eq!(a, [1, 2, 3, 4, 7, 9]);
    }

    #[test]
    fn test_merge_respects_sub_range() {
        let mut a = [99, 3, 5, 4, 6, 0];
        let mut aux = a.to_vec();
        merge(&mut natural::<i32>(), &mut a, &mut aux, 1, 2, 4);
        assert_eq!(a, [99, 3, 4, 5, 6, 0]);
    }

    #[test]
    fn test_top_down_sorts() {
        let mut a = [9, 8, 7, 1, 2, 3, 6, 5, 4];
        merge_sort(natural::<i32>(), &mut a);
        assert!(is_sorted(natural::<i32>(), &a));
    }

    #[test]
    fn test_bottom_up_sorts_non_power_of_two_lengths() {
        for n in 0..40 {
            let mut a: Vec<i32> = (0..n).rev().collect();
            merge_sort_bottom_up(natural::<i32>(), &mut a);
            assert!(is_sorted(natural::<i32>(), &a), "length {n}");
        }
    }

    #[test]
    fn test_hybrid_matches_plain_merge_sort() {
        // lengths straddling the cutoff
        for n in [0, 1, 7, 8, 9, 16, 17, 100] {
            let mut plain: Vec<i32> = (0..n).map(|i| (i * 37) % 11).collect();
            let mut hybrid = plain.clone();
            merge_sort(natural::<i32>(), &mut plain);
            merge_sort_with_insertion(natural::<i32>(), &mut hybrid);
            assert_eq!(plain, hybrid);
        }
    }

    #[test]
    fn test_stability() {
        // equal keys keep their input order
        let mut a = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        merge_sort(|x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0), &mut a);
        assert_eq!(a, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);
    }
}
