//! Min-priority queue with stable tie-breaking.
//!
//! Items with equal priority pop in the order they were pushed (FIFO).
//! This makes cost-ordered searches reproducible: two runs over the same
//! problem expand states in the same order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::error::{check_priority, Result};

/// Heap entry. Ordered so that `BinaryHeap` (a max-heap) yields the lowest
/// priority first and, among equal priorities, the lowest sequence number.
#[derive(Debug)]
struct Entry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue.
///
/// `pop` returns the item with the smallest priority; ties pop FIFO.
/// NaN priorities are rejected on `push`.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Insert an item with the given priority.
    ///
    /// Fails with `InvalidPriority` if `priority` is NaN.
    pub fn push(&mut self, item: T, priority: f64) -> Result<()> {
        let priority = check_priority(priority, "priority queue push")?;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { priority, seq, item });
        Ok(())
    }

    /// Remove and return the minimum-priority item with its priority.
    pub fn pop(&mut self) -> Option<(T, f64)> {
        self.heap.pop().map(|entry| (entry.item, entry.priority))
    }

    /// Priority of the item `pop` would return next.
    #[must_use]
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.priority)
    }

    /// Number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop all queued items. Sequence numbers keep increasing.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
