//! Fixed-capacity LIFO stack

/// Array-backed stack that never grows past its capacity.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Smallest capacity a stack can be created with
    pub const MIN_CAPACITY: usize = 1;

    /// Create an empty stack. Capacities below `MIN_CAPACITY` are raised to it.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(Self::MIN_CAPACITY);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push onto the top. Returns false if the stack was full.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut s = BoundedStack::new(3);
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.peek(), Some(&3));
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn test_full_stack_rejects() {
        let mut s = BoundedStack::new(1);
        assert!(s.push("a"));
        assert!(s.is_full());
        assert!(!s.push("b"));
        assert_eq!(s.peek(), Some(&"a"));
        assert_eq!(s.pop(), Some("a"));
        assert!(s.push("b"));
        assert_eq!(s.capacity(), 1);
    }
}
