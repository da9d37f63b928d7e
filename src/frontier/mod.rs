//! Frontier structures for graph search.
//!
//! The order in which a search pops frontier entries is what separates
//! the strategies:
//! - **LIFO** ([`LifoFrontier`]): depth-first search
//! - **FIFO** ([`FifoFrontier`]): breadth-first search
//! - **Priority** ([`PriorityQueue`]): uniform-cost, greedy and A*
//!
//! ## Example Usage
//!
//! ```
//! use ai_search::frontier::{FifoFrontier, Frontier, LifoFrontier};
//!
//! let mut stack = LifoFrontier::new();
//! let mut queue = FifoFrontier::new();
//! for i in 0..3 {
//!     stack.push(i);
//!     queue.push(i);
//! }
//!
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(queue.pop(), Some(0));
//! ```

mod fifo;
mod lifo;
mod priority;

pub use fifo::FifoFrontier;
pub use lifo::LifoFrontier;
pub use priority::PriorityQueue;

/// Insertion-ordered frontier.
///
/// Implementations decide which end `pop` takes from. Every pushed item is
/// popped at most once.
pub trait Frontier<T> {
    /// Add an item to the frontier.
    fn push(&mut self, item: T);

    /// Remove the next item, or `None` when exhausted.
    fn pop(&mut self) -> Option<T>;

    /// Number of items waiting.
    fn len(&self) -> usize;

    /// Check if the frontier is exhausted.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every waiting item.
    fn clear(&mut self);
}
