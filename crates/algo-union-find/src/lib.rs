//! Disjoint-set (union-find) connectivity over elements `0..n`.
//!
//! Four implementations of the same [`UnionFind`] contract, in increasing
//! order of sophistication:
//!
//! | Implementation | `union` | `connected` |
//! |----------------|---------|-------------|
//! | [`QuickFind`] | O(n) | O(1) |
//! | [`QuickUnion`] | tree depth (worst O(n)) | tree depth |
//! | [`WeightedQuickUnion`] | O(log n) | O(log n) |
//! | [`WeightedQuickUnionPathComp`] | near-O(1) amortized | near-O(1) amortized |
//!
//! `connected` takes `&mut self` because the path-compressing variant
//! rewrites parent links while it looks up roots. Element indices are the
//! caller's responsibility; they are checked by `debug_assert!` and by
//! ordinary slice bounds, not by a recoverable error.
//!
//! # Examples
//!
//! ```
//! use algo_union_find::{UnionFind, WeightedQuickUnionPathComp};
//!
//! let mut uf = WeightedQuickUnionPathComp::new(10);
//! uf.union(4, 3);
//! uf.union(3, 8);
//! assert!(uf.connected(4, 8));
//! assert!(!uf.connected(4, 0));
//! ```

mod path_comp;
mod quick_find;
mod quick_union;
mod weighted;

pub use path_comp::WeightedQuickUnionPathComp;
pub use quick_find::QuickFind;
pub use quick_union::QuickUnion;
pub use weighted::WeightedQuickUnion;

/// Connectivity contract shared by all four implementations.
pub trait UnionFind {
    /// Merge the components containing `a` and `b`. Joining two elements
    /// already in the same component is a no-op, including `union(a, a)`.
    fn union(&mut self, a: usize, b: usize);

    /// Are `a` and `b` in the same component?
    fn connected(&mut self, a: usize, b: usize) -> bool;
}

/// Each element starts as the root of its own singleton: `parents[i] == i`.
pub(crate) fn identity_parents(n: usize) -> Vec<usize> {
    (0..n).collect()
}
