//! Max-priority queues.
//!
//! Two implementations of the same insert/del-max contract, both holding a
//! caller-supplied comparator:
//!
//! - [`UnorderedMaxPq`] — O(1) insert, O(n) del-max by linear scan.
//! - [`BinaryHeapPq`] — O(log n) insert and del-max over an implicit
//!   binary heap.
//!
//! The heap re-balancing primitives [`swim`] and [`sink`] are standalone
//! functions over a comparator and a raw backing slice, so they can be
//! exercised (and reused) independently of the queue type.
//!
//! # Examples
//!
//! ```
//! use algo_pqueue::BinaryHeapPq;
//!
//! let mut pq = BinaryHeapPq::with_comparator(|a: &i32, b: &i32| a.cmp(b));
//! for v in [3, 1, 4, 1, 5] {
//!     pq.insert(v);
//! }
//! assert_eq!(pq.del_max(), Some(5));
//! assert_eq!(pq.del_max(), Some(4));
//! assert_eq!(pq.len(), 3);
//! ```

pub mod binary_heap;
pub mod heap;
pub mod unordered;

pub use binary_heap::BinaryHeapPq;
pub use heap::{sink, swim};
pub use unordered::UnorderedMaxPq;
