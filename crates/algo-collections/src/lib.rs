//! Linear containers: stacks, a FIFO queue and an iterable bag.
//!
//! Each container owns its storage exclusively and is mutated only through
//! its public operations. Underflow (`pop`/`dequeue` on empty) is an
//! explicit `None`, never a panic; the fixed-capacity stack reports
//! overflow as a [`CapacityError`] instead of writing out of bounds.
//!
//! The linked variants deliberately compute `len` by traversal rather than
//! caching a count, keeping the node contract minimal; the array-backed
//! stacks cache their logical count.
//!
//! [`evaluate`] is the classic two-stack client of [`ResizingStack`]: it
//! computes fully parenthesized arithmetic with one stack of values and
//! one of operators.
//!
//! # Examples
//!
//! ```
//! use algo_collections::{Bag, LinkedQueue, LinkedStack};
//!
//! let mut stack = LinkedStack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Some(2));
//!
//! let mut queue = LinkedQueue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//! assert_eq!(queue.dequeue(), Some("a"));
//!
//! let mut bag = Bag::new();
//! bag.add(10);
//! bag.add(20);
//! assert_eq!(bag.iter().sum::<i32>(), 30);
//! ```

pub mod bag;
pub mod eval;
pub mod queue;
pub mod stack;

pub use bag::Bag;
pub use eval::{evaluate, EvalError};
pub use queue::LinkedQueue;
pub use stack::{CapacityError, FixedArrayStack, LinkedStack, ResizingStack};
