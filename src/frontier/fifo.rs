//! First-in, first-out frontier.

use std::collections::VecDeque;

use super::Frontier;

/// Queue frontier backed by a `VecDeque`.
///
/// Items pop from the opposite end they were pushed at, so a graph search
/// explores by non-decreasing depth.
#[derive(Clone, Debug)]
pub struct FifoFrontier<T> {
    items: VecDeque<T>,
}

impl<T> FifoFrontier<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for FifoFrontier<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
