//! Add-only multiset with restartable iteration.

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Insertion-order-irrelevant collection: items go in, never come out.
///
/// `add` prepends in O(1). [`iter`](Bag::iter) starts a fresh forward
/// traversal every call and never mutates the bag, so a bag can be
/// iterated any number of times.
///
/// # Examples
///
/// ```
/// use algo_collections::Bag;
///
/// let mut bag = Bag::new();
/// bag.add(1);
/// bag.add(2);
/// bag.add(2);
/// assert_eq!(bag.len(), 3);
///
/// let first: i32 = bag.iter().sum();
/// let second: i32 = bag.iter().sum();
/// assert_eq!(first, second);
/// ```
pub struct Bag<T> {
    first: Option<Box<Node<T>>>,
}

impl<T> Bag<T> {
    pub fn new() -> Self {
        Self { first: None }
    }

    pub fn add(&mut self, value: T) {
        let old_first = self.first.take();
        self.first = Some(Box::new(Node {
            value,
            next: old_first,
        }));
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Number of items, computed by traversal.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Fresh forward traversal over the bag's items.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.first.as_deref(),
        }
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Bag<T> {
    // the derived recursive drop overflows the call stack on long chains
    fn drop(&mut self) {
        let mut current = self.first.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
