//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the slot whose contents have not been accessed for the longest
//! time. It maintains a usage stack: index 0 is the most recently used slot and the
//! last element is the least recently used one.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(N) where N is the number of occupied slots
//!   - `get_victim()`: O(1)
//! - **Space Complexity:** O(N)
//! - **Best Case:** Traces with good temporal locality
//! - **Worst Case:** Cyclic scans larger than capacity (thrashing)

use super::ReplacementPolicy;

/// LRU Policy state.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    /// Usage stack. Index 0 is MRU, last index is LRU.
    usage: Vec<usize>,
}

impl LruPolicy {
    /// Creates a new LRU policy for up to `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            usage: Vec::with_capacity(capacity),
        }
    }

    fn promote(&mut self, slot: usize) {
        self.remove(slot);
        self.usage.insert(0, slot);
    }
}

impl ReplacementPolicy for LruPolicy {
    /// A fill counts as a use.
    fn fill(&mut self, slot: usize) {
        self.promote(slot);
    }

    /// Moves the accessed `slot` to the front of the usage stack.
    fn update(&mut self, slot: usize) {
        self.promote(slot);
    }

    fn remove(&mut self, slot: usize) {
        if let Some(pos) = self.usage.iter().position(|&s| s == slot) {
            let _ = self.usage.remove(pos);
        }
    }

    /// Returns the slot at the bottom of the usage stack.
    fn get_victim(&mut self) -> Option<usize> {
        self.usage.last().copied()
    }
}
