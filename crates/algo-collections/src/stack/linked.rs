struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Singly-linked LIFO stack.
///
/// `push` prepends a node and `pop` detaches the head, both O(1).
/// [`len`](LinkedStack::len) walks the chain rather than caching a count.
///
/// # Examples
///
/// ```
/// use algo_collections::LinkedStack;
///
/// let mut stack = LinkedStack::new();
/// assert_eq!(stack.pop(), None);
/// stack.push("a");
/// stack.push("b");
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.pop(), Some("b"));
/// assert_eq!(stack.pop(), Some("a"));
/// assert!(stack.is_empty());
/// ```
pub struct LinkedStack<T> {
    first: Option<Box<Node<T>>>,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self { first: None }
    }

    pub fn push(&mut self, value: T) {
        let old_first = self.first.take();
        self.first = Some(Box::new(Node {
            value,
            next: old_first,
        }));
    }

    /// Detach and return the head, or `None` on underflow.
    pub fn pop(&mut self) -> Option<T> {
        let node = self.first.take()?;
        self.first = node.next;
        Some(node.value)
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Number of items, computed by traversal.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current = self.first.as_deref();
        while let Some(node) = current {
            count += 1;
            current = node.next.as_deref();
        }
        count
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    // the derived recursive drop overflows the call stack on long chains
    fn drop(&mut self) {
        let mut current = self.first.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}
