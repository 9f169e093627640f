use std::cmp::Ordering;

/// Heapsort: build a max-heap in place, then repeatedly swap the root
/// into the shrinking suffix and re-sink.
///
/// The slice is read as a 1-indexed heap over 0-indexed storage (logical
/// `k` at `a[k - 1]`). Construction sinks every position from the middle
/// outward; no extra memory, not stable.
///
/// # Examples
///
/// ```
/// use algo_ordering::natural;
/// use algo_sorting::heap_sort;
///
/// let mut data = vec![4, 10, 3, 5, 1];
/// heap_sort(natural::<i32>(), &mut data);
/// assert_eq!(data, vec![1, 3, 4, 5, 10]);
/// ```
pub fn heap_sort<T, F>(mut compare: F, a: &mut [T])
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut n = a.len();
    for k in (1..=n / 2).rev() {
        sink(&mut compare, a, n, k);
    }
    while n > 1 {
        a.swap(0, n - 1);
        n -= 1;
        sink(&mut compare, a, n, 1);
    }
}

// Same primitive as the priority queue's sink, repeated here so the sort
// stays self-contained over a bare slice.
fn sink<T, F>(compare: &mut F, a: &mut [T], n: usize, mut k: usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while 2 * k <= n {
        let mut j = 2 * k;
        if j < n && compare(&a[j - 1], &a[j]) == Ordering::Less {
            j += 1;
        }
        if compare(&a[k - 1], &a[j - 1]) != Ordering::Less {
            break;
        }
        a.swap(k - 1, j - 1);
        k = j;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algo_ordering::{is_sorted, natural};

    #[test]
    fn test_sorts_random_input() {
        let mut a = [12, 11, 13, 5, 6, 7];
        heap_sort(natural::<i32>(), &mut a);
        assert_eq!(a, [5, 6, 7, 11, 12, 13]);
    }

    #[test]
    fn test_all_lengths_up_to_64() {
        for n in 0..64i32 {
            let mut a: Vec<i32> = (0..n).map(|i| (i * 31) % 13).collect();
            heap_sort(natural::<i32>(), &mut a);
            assert!(is_sorted(natural::<i32>(), &a), "length {n}");
        }
    }

    #[test]
    fn test_duplicates_and_reverse() {
        let mut a = [9, 9, 1, 1, 5, 5, 9];
        heap_sort(natural::<i32>(), &mut a);
        assert_eq!(a, [1, 1, 5, 5, 9, 9, 9]);
    }
}
