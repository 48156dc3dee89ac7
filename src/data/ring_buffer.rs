//! Fixed-capacity ring buffer holding the most recent samples of a channel.

use crate::error::{GraphError, Result};

/// A single `(time, value)` point. `time` is expected to be non-decreasing
/// across pushes to the same channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub time: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<[f64; 2]> for Sample {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

/// Append-only circular buffer. Once full, every push overwrites the oldest
/// retained element.
#[derive(Debug, Clone)]
pub struct CircularSampleBuffer<T = Sample> {
    slots: Vec<T>,
    capacity: usize,
    // Slot of the oldest element; only moves once the buffer is full.
    head: usize,
}

impl<T: Copy> CircularSampleBuffer<T> {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GraphError::invalid("buffer capacity must be at least 1"));
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        })
    }

    /// O(1). Never fails.
    pub fn push(&mut self, item: T) {
        if self.slots.len() < self.capacity {
            self.slots.push(item);
        } else {
            self.slots[self.head] = item;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// The element `index` positions newer than the oldest retained one.
    pub fn get(&self, index: usize) -> Result<T> {
        let len = self.slots.len();
        if index >= len {
            return Err(GraphError::OutOfRange { index, len });
        }
        Ok(self.slots[(self.head + index) % len])
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + '_ {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter()).copied()
    }
}
