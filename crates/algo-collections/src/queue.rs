//! FIFO queue over an index arena.
//!
//! A singly-linked queue needs both a head and a tail link; instead of
//! pointer-chasing, nodes live in a caller-invisible arena and link to each
//! other by `u32` index. Dequeued slots go on a free list and are reused by
//! later enqueues, so a long-lived queue does not grow without bound.

struct Slot<T> {
    value: Option<T>,
    next: Option<u32>,
}

/// FIFO queue: `enqueue` appends at the tail, `dequeue` detaches the head.
///
/// Dequeuing the last item clears the tail link as well, so a drained queue
/// is indistinguishable from a fresh one.
///
/// # Examples
///
/// ```
/// use algo_collections::LinkedQueue;
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// queue.enqueue(3);
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// queue.enqueue(4);
/// assert_eq!(queue.dequeue(), Some(3));
/// assert_eq!(queue.dequeue(), Some(4));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct LinkedQueue<T> {
    slots: Vec<Slot<T>>,
    first: Option<u32>,
    last: Option<u32>,
    free: Vec<u32>,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            first: None,
            last: None,
            free: Vec::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        let slot = Slot {
            value: Some(value),
            next: None,
        };
        let i = match self.free.pop() {
            Some(i) => {
                self.slots[i as usize] = slot;
                i
            }
            None => {
                self.slots.push(slot);
                (self.slots.len() - 1) as u32
            }
        };
        match self.last {
            Some(last) => self.slots[last as usize].next = Some(i),
            None => self.first = Some(i),
        }
        self.last = Some(i);
    }

    /// Detach and return the head, or `None` on underflow.
    pub fn dequeue(&mut self) -> Option<T> {
        let i = self.first?;
        let value = self.slots[i as usize].value.take();
        self.first = self.slots[i as usize].next.take();
        self.free.push(i);
        if self.first.is_none() {
            // nothing left, drop the tail reference too
            self.last = None;
        }
        value
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Number of items, computed by traversing the live links.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current = self.first;
        while let Some(i) = current {
            count += 1;
            current = self.slots[i as usize].next;
        }
        count
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = LinkedQueue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");
        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), Some("c"));
    }

    #[test]
    fn test_underflow_returns_none() {
        let mut queue: LinkedQueue<i32> = LinkedQueue::new();
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_drain_then_reuse() {
        let mut queue = LinkedQueue::new();
        queue.enqueue(1);
        assert_eq!(queue.dequeue(), Some(1));
        assert!(queue.is_empty());
        // a drained queue must behave like a fresh one (tail was cleared)
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_len_by_traversal() {
        let mut queue = LinkedQueue::new();
        assert_eq!(queue.len(), 0);
        for i in 0..4 {
            queue.enqueue(i);
        }
        assert_eq!(queue.len(), 4);
        queue.dequeue();
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut queue = LinkedQueue::new();
        for round in 0..100 {
            queue.enqueue(round);
            assert_eq!(queue.dequeue(), Some(round));
        }
        // one live slot is enough for the whole sequence
        assert!(queue.slots.len() <= 2);
    }

    #[test]
    fn test_interleaved() {
        let mut queue = LinkedQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }
}
