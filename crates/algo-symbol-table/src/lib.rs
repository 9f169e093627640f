//! Ordered symbol tables keyed by a caller-supplied comparator.
//!
//! Two implementations of the same put/get/min/max/floor/ceiling
//! contract:
//!
//! - [`Bst`] — plain binary search tree; no rebalancing, so adversarial
//!   insertion order degrades it to a list.
//! - [`RedBlackBst`] — left-leaning red-black tree; the same searches,
//!   but `put` rebalances with rotations and color flips, keeping every
//!   path O(log n).
//!
//! Instead of owning boxed child pointers, nodes live in an arena `Vec`
//! and link to each other by `Option<u32>` index; a node carries the
//! color of its incoming link, which the plain BST simply ignores. The
//! search operations are free functions over `(arena, root, comparator)`
//! shared verbatim by both trees — only insertion differs.
//!
//! # Examples
//!
//! ```
//! use algo_symbol_table::RedBlackBst;
//!
//! let mut st = RedBlackBst::with_comparator(|a: &i32, b: &i32| a.cmp(b));
//! st.put(5, "five");
//! st.put(2, "two");
//! st.put(7, "seven");
//! assert_eq!(st.get(&2), Some(&"two"));
//! assert_eq!(st.min(), Some(&2));
//! assert_eq!(st.floor(&6), Some(&5));
//! assert_eq!(st.ceiling(&6), Some(&7));
//! ```

pub mod bst;
pub mod node;
pub mod red_black;
pub mod search;

pub use bst::Bst;
pub use node::Node;
pub use red_black::RedBlackBst;
