use std::collections::VecDeque;

use crate::core::types::Tick;

/// FIFO line of cars, each represented by the tick it arrived at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitQueue {
    arrivals: VecDeque<Tick>,
}

impl WaitQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a car at the rear of the line
    pub fn enqueue(&mut self, timestamp: Tick) {
        debug_assert!(
            self.arrivals.back().map_or(true, |&last| last <= timestamp),
            "arrival timestamps must be non-decreasing"
        );
        self.arrivals.push_back(timestamp);
    }

    /// Remove the car that has waited longest
    pub fn dequeue(&mut self) -> Option<Tick> {
        self.arrivals.pop_front()
    }

    pub fn peek(&self) -> Option<Tick> {
        self.arrivals.front().copied()
    }

    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }
}
