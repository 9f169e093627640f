//! In-place comparison sorts over a caller-supplied three-way comparator.
//!
//! None of the routines assume a numeric or `Ord` element type; every one
//! takes `F: FnMut(&T, &T) -> Ordering` explicitly (build one with
//! [`algo_ordering::natural`] when the type's own ordering is wanted) and
//! leaves the slice non-decreasing under that comparator.
//!
//! | Routine | Cost | Notes |
//! |---------|------|-------|
//! | [`selection_sort`] | O(n²) | not adaptive |
//! | [`insertion_sort`] | O(n²) | adaptive, fast on nearly-sorted input |
//! | [`shell_sort`] | sub-quadratic | `3h + 1` gap sequence |
//! | [`merge_sort`] | O(n log n) | stable, recursive |
//! | [`merge_sort_bottom_up`] | O(n log n) | stable, no recursion |
//! | [`merge_sort_with_insertion`] | O(n log n) | stable, cutoff 8 |
//! | [`quick_sort`] | expected O(n log n) | shuffled, Hoare partition |
//! | [`quick_sort_3way`] | expected O(n log n) | linear on duplicate keys |
//! | [`quick_select`] | expected O(n) | k-th order statistic |
//! | [`heap_sort`] | O(n log n) | in-place, not stable |
//!
//! The quicksort family shuffles first to make its expected cost hold on
//! any input order; randomness is injected as a [`rand::Rng`], so a seeded
//! generator makes those routines deterministic.
//!
//! [`three_sum_count`] — the brute-force zero-triple counter — lives here
//! too as the other whole-slice scan routine.
//!
//! # Examples
//!
//! ```
//! use algo_ordering::{is_sorted, natural};
//! use algo_sorting::merge_sort;
//!
//! let mut data = vec![5, 3, 4, 1, 2];
//! merge_sort(natural::<i32>(), &mut data);
//! assert!(is_sorted(natural::<i32>(), &data));
//! ```

pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod shell;
pub mod shuffle;
pub mod three_sum;

pub use heap::heap_sort;
pub use insertion::{insertion_sort, insertion_sort_range};
pub use merge::{merge, merge_sort, merge_sort_bottom_up, merge_sort_with_insertion};
pub use quick::{partition, quick_select, quick_sort, quick_sort_3way};
pub use selection::selection_sort;
pub use shell::shell_sort;
pub use shuffle::shuffle;
pub use three_sum::three_sum_count;
