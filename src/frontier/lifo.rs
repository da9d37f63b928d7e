//! Last-in, first-out frontier.

use super::Frontier;

/// Stack frontier backed by a `Vec`.
///
/// The most recently pushed item pops first, which makes a graph search
/// depth-first.
#[derive(Clone, Debug)]
pub struct LifoFrontier<T> {
    items: Vec<T>,
}

impl<T> LifoFrontier<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for LifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for LifoFrontier<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
