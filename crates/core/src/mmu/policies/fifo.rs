//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the slot that was filled longest ago, regardless of how recently
//! it was accessed. Occupied slots sit in a queue in fill order: a fill appends at the
//! tail and the victim is always the head. When every slot stays occupied this is a
//! round-robin cycle over the slot numbers.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `fill()`: O(1) for a fresh slot, O(N) when a slot is refilled in place
//!   - `update()`: O(1)
//!   - `get_victim()`: O(1)
//! - **Space Complexity:** O(N) where N is the number of slots
//! - **Best Case:** Streaming accesses where all pages have equal importance
//! - **Worst Case:** Workloads with strong temporal locality (may evict hot pages)

use std::collections::VecDeque;

use super::ReplacementPolicy;

/// FIFO Policy state.
#[derive(Debug, Clone)]
pub struct FifoPolicy {
    /// Occupied slots, oldest fill at the front.
    queue: VecDeque<usize>,
}

impl FifoPolicy {
    /// Creates a new FIFO policy for up to `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    /// Moves `slot` to the tail of the queue.
    fn fill(&mut self, slot: usize) {
        self.remove(slot);
        self.queue.push_back(slot);
    }

    /// Accesses do not change fill order.
    fn update(&mut self, _slot: usize) {}

    fn remove(&mut self, slot: usize) {
        if let Some(pos) = self.queue.iter().position(|&s| s == slot) {
            let _ = self.queue.remove(pos);
        }
    }

    /// Returns the head of the queue (the oldest fill).
    fn get_victim(&mut self) -> Option<usize> {
        self.queue.front().copied()
    }
}
