/// Stack over a growable backing array with amortized-O(1) push and pop.
///
/// The backing array doubles when full before a push and halves once the
/// count drops to a quarter of capacity after a pop. The 2x/quarter
/// hysteresis means a push-pop sequence at a capacity boundary cannot
/// oscillate between grow and shrink.
///
/// # Examples
///
/// ```
/// use algo_collections::ResizingStack;
///
/// let mut stack = ResizingStack::new();
/// for i in 0..100 {
///     stack.push(i);
/// }
/// assert_eq!(stack.pop(), Some(99));
/// assert_eq!(stack.len(), 99);
/// ```
pub struct ResizingStack<T> {
    items: Box<[Option<T>]>,
    count: usize,
}

impl<T> ResizingStack<T> {
    pub fn new() -> Self {
        Self {
            items: (0..1).map(|_| None).collect(),
            count: 0,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.count == self.items.len() {
            self.resize(self.items.len() * 2);
        }
        self.items[self.count] = Some(value);
        self.count += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        let value = self.items[self.count].take();
        if self.items.len() > 1 && self.count <= self.items.len() / 4 {
            self.resize(self.items.len() / 2);
        }
        value
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn len(&self) -> usize {
        self.count
    }

    /// Current backing-array capacity; exceeds `len` between resizes.
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.count);
        let mut next: Box<[Option<T>]> = (0..capacity).map(|_| None).collect();
        for (slot, item) in next.iter_mut().zip(self.items.iter_mut().take(self.count)) {
            *slot = item.take();
        }
        self.items = next;
    }
}

impl<T> Default for ResizingStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
