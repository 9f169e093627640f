use super::CapacityError;

/// Bounded stack over a fixed-capacity backing array.
///
/// The naive array stack: no resizing ever happens. Pushing a full stack
/// fails with [`CapacityError`] rather than writing out of bounds.
///
/// # Examples
///
/// ```
/// use algo_collections::FixedArrayStack;
///
/// let mut stack = FixedArrayStack::with_capacity(2);
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// assert!(stack.push(3).is_err());
/// assert_eq!(stack.pop(), Some(2));
/// ```
pub struct FixedArrayStack<T> {
    items: Box<[Option<T>]>,
    count: usize,
}

impl<T> FixedArrayStack<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: (0..capacity).map(|_| None).collect(),
            count: 0,
        }
    }

    pub fn push(&mut self, value: T) -> Result<(), CapacityError> {
        if self.count == self.items.len() {
            return Err(CapacityError {
                capacity: self.items.len(),
            });
        }
        self.items[self.count] = Some(value);
        self.count += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        self.items[self.count].take()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_within_capacity() {
        let mut stack = FixedArrayStack::with_capacity(4);
        for i in 0..4 {
            stack.push(i).unwrap();
        }
        assert_eq!(stack.len(), 4);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let mut stack = FixedArrayStack::with_capacity(1);
        stack.push('a').unwrap();
        assert_eq!(stack.push('b'), Err(CapacityError { capacity: 1 }));
        // the rejected push leaves the stack untouched
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), Some('a'));
    }

    #[test]
    fn test_underflow_returns_none() {
        let mut stack: FixedArrayStack<i32> = FixedArrayStack::with_capacity(2);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_slot_freed_on_pop() {
        let mut stack = FixedArrayStack::with_capacity(1);
        stack.push(1).unwrap();
        assert_eq!(stack.pop(), Some(1));
        // popped slot is reusable
        stack.push(2).unwrap();
        assert_eq!(stack.pop(), Some(2));
    }
}
