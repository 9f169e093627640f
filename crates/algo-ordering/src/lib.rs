//! Three-way comparison contract shared by every ordered structure.
//!
//! A comparison result is always the tri-state [`Ordering`]
//! (`Less | Equal | Greater`), never a boolean, so callers can distinguish
//! equality from either direction and implement tie-breaks explicitly.
//!
//! Every ordered structure and sorting routine in this workspace takes a
//! comparator as an explicit parameter: free functions take
//! `F: FnMut(&T, &T) -> Ordering`, comparator-holding structures take
//! `C: Fn(&K, &K) -> Ordering` at construction. No structure assumes a
//! default ordering on its element type; for types where the natural `Ord`
//! ordering is wanted, [`natural`] builds that comparator.
//!
//! # Examples
//!
//! ```
//! use algo_ordering::{is_sorted, natural};
//!
//! assert!(is_sorted(natural::<i32>(), &[1, 2, 2, 3]));
//! assert!(!is_sorted(natural::<i32>(), &[2, 1]));
//!
//! // Multiple orderings over the same element type.
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert!(is_sorted(by_len, &["b", "cc", "aaa"]));
//! ```

use std::cmp::Ordering;

/// Does `v` compare strictly less than `w`?
///
/// Derived helper used by swap-based algorithms that only need the
/// `Less` arm of the comparison.
#[inline]
pub fn less<T, F>(compare: &mut F, v: &T, w: &T) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    compare(v, w) == Ordering::Less
}

/// Comparator built from the type's own [`Ord`] instance.
///
/// The sorting routines and ordered containers never assume this ordering;
/// it has to be passed in like any other comparator.
#[inline]
pub fn natural<T: Ord>() -> impl Fn(&T, &T) -> Ordering {
    |a: &T, b: &T| a.cmp(b)
}

/// Is the whole slice in non-decreasing order under `compare`?
pub fn is_sorted<T, F>(compare: F, a: &[T]) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    if a.is_empty() {
        return true;
    }
    is_sorted_range(compare, a, 0, a.len() - 1)
}

/// Is the inclusive range `[lo, hi]` in non-decreasing order under `compare`?
///
/// Used by the merge routine's development assertions to check that both
/// halves are sorted before interleaving.
pub fn is_sorted_range<T, F>(mut compare: F, a: &[T], lo: usize, hi: usize) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    for k in lo..hi {
        if compare(&a[k], &a[k + 1]) == Ordering::Greater {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_less() {
        let mut cmp = natural::<i32>();
        assert!(less(&mut cmp, &1, &2));
        assert!(!less(&mut cmp, &2, &1));
        assert!(!less(&mut cmp, &2, &2));
    }

    #[test]
    fn test_natural_is_three_way() {
        let cmp = natural::<i32>();
        assert_eq!(cmp(&1, &2), Ordering::Less);
        assert_eq!(cmp(&2, &2), Ordering::Equal);
        assert_eq!(cmp(&3, &2), Ordering::Greater);
    }

    #[test]
    fn test_is_sorted_trivial() {
        assert!(is_sorted(natural::<i32>(), &[]));
        assert!(is_sorted(natural::<i32>(), &[7]));
    }

    #[test]
    fn test_is_sorted_with_duplicates() {
        assert!(is_sorted(natural::<i32>(), &[1, 1, 2, 3, 3]));
        assert!(!is_sorted(natural::<i32>(), &[1, 3, 2]));
    }

    #[test]
    fn test_is_sorted_range_partial() {
        let a = [9, 1, 2, 3, 0];
        assert!(is_sorted_range(natural::<i32>(), &a, 1, 3));
        assert!(!is_sorted_range(natural::<i32>(), &a, 0, 3));
        // a single-element range is always sorted
        assert!(is_sorted_range(natural::<i32>(), &a, 4, 4));
    }

    #[test]
    fn test_custom_comparator() {
        // descending order under a reversed comparator
        let rev = |a: &i32, b: &i32| b.cmp(a);
        assert!(is_sorted(rev, &[3, 2, 1]));
        assert!(!is_sorted(rev, &[1, 2]));
    }
}
