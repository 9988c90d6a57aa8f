//! Fixed-capacity FIFO queue

use std::collections::VecDeque;

/// FIFO ring buffer that never grows past its capacity.
///
/// Pushing onto a full queue is rejected and leaves the queue untouched.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Smallest capacity a queue can be created with
    pub const MIN_CAPACITY: usize = 1;

    /// Create an empty queue. Capacities below `MIN_CAPACITY` are raised to it.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(Self::MIN_CAPACITY);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append at the tail. Returns false if the queue was full.
    pub fn push_back(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push_back(item);
        true
    }

    /// Remove and return the head (oldest) item
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
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

    /// Iterate from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
