use std::collections::VecDeque;

use super::error::GameError;
use super::keys;
use super::state::Position;

/// First-in first-out container backed by a ring buffer.
///
/// The front holds the oldest element and the back the newest. Iteration
/// always follows push order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fifo<T> {
    items: VecDeque<T>,
}

/// Snake body, oldest segment (tail of the snake) at the front.
pub type SegmentQueue = Fifo<Position>;

/// Raw key codes waiting to be consumed by the next tick.
pub type InputQueue = Fifo<keys::Code>;

impl<T> Fifo<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an element at the newest end.
    pub fn push_tail(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the oldest element.
    pub fn pop_head(&mut self) -> Result<T, GameError> {
        self.items
            .pop_front()
            .ok_or(GameError::EmptyQueue { operation: "pop" })
    }

    /// Borrow the oldest element without removing it.
    pub fn peek_head(&self) -> Result<&T, GameError> {
        self.items
            .front()
            .ok_or(GameError::EmptyQueue { operation: "peek" })
    }

    /// Borrow the newest element, if any.
    pub fn peek_tail(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Fifo<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
