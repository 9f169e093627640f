use std::cmp::Ordering;

use rand::Rng;

use crate::shuffle::shuffle;

/// Hoare partition over the inclusive range `[lo, hi]` with `a[lo]` as
/// the pivot.
///
/// Two pointers scan inward from both ends, swapping elements that sit on
/// the wrong side; the final swap places the pivot at the boundary index,
/// which is returned. Everything left of the boundary compares no greater
/// than the pivot, everything right no less.
pub fn partition<T, F>(compare: &mut F, a: &mut [T], lo: usize, hi: usize) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut i = lo;
    let mut j = hi + 1;
    loop {
        loop {
            i += 1;
            if compare(&a[i], &a[lo]) != Ordering::Less || i == hi {
                break;
            }
        }
        loop {
            j -= 1;
            if compare(&a[lo], &a[j]) != Ordering::Less || j == lo {
                break;
            }
        }
        if i >= j {
            break;
        }
        a.swap(i, j);
    }
    a.swap(lo, j);
    j
}

/// Quicksort with an up-front Knuth shuffle.
///
/// The shuffle guarantees the expected O(n log n) cost on any input
/// order, including already-sorted input; inject a seeded generator for a
/// deterministic run.
///
/// # Examples
///
/// ```
/// use algo_ordering::natural;
/// use algo_sorting::quick_sort;
///
/// let mut rng = rand::thread_rng();
/// let mut data = vec![5, 3, 4, 1, 2];
/// quick_sort(natural::<i32>(), &mut rng, &mut data);
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn quick_sort<T, F, R>(mut compare: F, rng: &mut R, a: &mut [T])
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    if a.len() < 2 {
        return;
    }
    shuffle(rng, a);
    let hi = a.len() - 1;
    sort(&mut compare, a, 0, hi);
}

fn sort<T, F>(compare: &mut F, a: &mut [T], lo: usize, hi: usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if hi <= lo {
        return;
    }
    let k = partition(compare, a, lo, hi);
    if k > lo {
        sort(compare, a, lo, k - 1);
    }
    sort(compare, a, k + 1, hi);
}

/// Three-way quicksort (Dutch national flag partition).
///
/// One linear pass groups the range into less-than, equal-to and
/// greater-than the pivot, so inputs with many duplicate keys cost a
/// partition per *distinct* key rather than per element.
///
/// # Examples
///
/// ```
/// use algo_ordering::natural;
/// use algo_sorting::quick_sort_3way;
///
/// let mut rng = rand::thread_rng();
/// let mut data = vec![5, 3, 4, 1, 2, 7, 6, 8, 5, 9, 0];
/// quick_sort_3way(natural::<i32>(), &mut rng, &mut data);
/// assert_eq!(data, vec![0, 1, 2, 3, 4, 5, 5, 6, 7, 8, 9]);
/// ```
pub fn quick_sort_3way<T, F, R>(mut compare: F, rng: &mut R, a: &mut [T])
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    if a.len() < 2 {
        return;
    }
    shuffle(rng, a);
    let hi = a.len() - 1;
    sort_3way(&mut compare, a, 0, hi);
}

fn sort_3way<T, F>(compare: &mut F, a: &mut [T], lo: usize, hi: usize)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if hi <= lo {
        return;
    }
    let pivot = a[lo].clone();
    let mut lt = lo;
    let mut gt = hi;
    let mut i = lo;
    while i <= gt {
        match compare(&a[i], &pivot) {
            Ordering::Less => {
                a.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                a.swap(i, gt);
                if gt == 0 {
                    break;
                }
                gt -= 1;
            }
            Ordering::Equal => i += 1,
        }
    }
    if lt > lo {
        sort_3way(compare, a, lo, lt - 1);
    }
    sort_3way(compare, a, gt + 1, hi);
}

/// Select the item of rank `k` (0-based) in expected O(n) time,
/// rearranging `a` as a side effect. Returns `None` when `k` is out of
/// range.
///
/// Reuses [`partition`] but recurses into only the side that contains the
/// target rank.
///
/// # Examples
///
/// ```
/// use algo_ordering::natural;
/// use algo_sorting::quick_select;
///
/// let mut rng = rand::thread_rng();
/// let mut data = vec![9, 1, 7, 3, 5];
/// let median = quick_select(natural::<i32>(), &mut rng, &mut data, 2);
/// assert_eq!(median, Some(&5));
/// ```
pub fn quick_select<'a, T, F, R>(
    mut compare: F,
    rng: &mut R,
    a: &'a mut [T],
    k: usize,
) -> Option<&'a T>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    if k >= a.len() {
        return None;
    }
    shuffle(rng, a);
    let mut lo = 0;
    let mut hi = a.len() - 1;
    while hi > lo {
        let j = partition(&mut compare, a, lo, hi);
        if j < k {
            lo = j + 1;
        } else if j > k {
            hi = j - 1;
        } else {
            break;
        }
    }
    Some(&a[k])
}
