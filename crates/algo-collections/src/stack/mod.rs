//! LIFO stacks.
//!
//! Three implementations of the same push/pop contract:
//!
//! - [`LinkedStack`] — singly-linked nodes, O(1) push/pop, `len` by
//!   traversal.
//! - [`FixedArrayStack`] — fixed-capacity backing array; pushing past
//!   capacity fails with [`CapacityError`].
//! - [`ResizingStack`] — amortized-O(1) growth: doubles when full, halves
//!   when a quarter full.

mod fixed;
mod linked;
mod resizing;

pub use fixed::FixedArrayStack;
pub use linked::LinkedStack;
pub use resizing::ResizingStack;

use thiserror::Error;

/// A bounded stack was pushed while already holding `capacity` items.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("stack capacity {capacity} exceeded")]
pub struct CapacityError {
    /// The fixed capacity of the stack that rejected the push.
    pub capacity: usize,
}
