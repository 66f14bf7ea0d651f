//! Strict first-in-first-out queue.
//!
//! [`FifoQueue`] is the counted queue used for both the incoming (cars
//! waiting at the gate) and outgoing (exits awaiting report) lines.
//! Insertion order is service order: there is no priority, no reordering
//! and no random access. Unlike a bare linked queue it tracks its length,
//! so callers never have to drain it just to count it.

use std::collections::VecDeque;

/// A counted FIFO queue.
#[derive(Debug)]
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> FifoQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append `item` at the tail.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the head, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Borrow the head without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Dequeue every item and return how many there were.
    ///
    /// Destructive: the queue is empty afterwards. Prefer [`len`](Self::len)
    /// unless the contents are meant to be discarded.
    pub fn drain_count(&mut self) -> usize {
        let mut count = 0;
        while self.dequeue().is_some() {
            count += 1;
        }
        count
    }

    /// Iterate head to tail without consuming.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_queue() {
        let mut q: FifoQueue<u32> = FifoQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.peek(), None);
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut q = FifoQueue::new();
        q.enqueue("a");
        q.enqueue("b");
        assert_eq!(q.peek(), Some(&"a"));
        assert_eq!(q.peek(), Some(&"a"));
        assert_eq!(q.len(), 2);
        assert_eq!(q.dequeue(), Some("a"));
        assert_eq!(q.peek(), Some(&"b"));
    }

    #[test]
    fn drain_count_empties() {
        let mut q = FifoQueue::new();
        for i in 0..5 {
            q.enqueue(i);
        }
        assert_eq!(q.drain_count(), 5);
        assert!(q.is_empty());
        assert_eq!(q.drain_count(), 0);
    }

    proptest! {
        #[test]
        fn service_order_is_insertion_order(items in prop::collection::vec(any::<u32>(), 0..64)) {
            let mut q = FifoQueue::new();
            for &i in &items {
                q.enqueue(i);
            }
            prop_assert_eq!(q.len(), items.len());
            prop_assert!(q.iter().copied().eq(items.iter().copied()));
            let mut out = Vec::new();
            while let Some(i) = q.dequeue() {
                out.push(i);
            }
            prop_assert_eq!(out, items);
        }
    }
}
