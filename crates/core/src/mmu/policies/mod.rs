//! Replacement Policies.
//!
//! Implements the algorithms for choosing which occupied slot to reclaim. The same
//! policies drive both physical frames (slot = frame number) and TLB entries
//! (slot = entry index).
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

use crate::config;

/// Trait for slot replacement policies.
///
/// A policy only tracks occupied slots. Callers report every fill, access and
/// release; `get_victim` then names the occupied slot to reclaim.
pub trait ReplacementPolicy: Send + Sync + std::fmt::Debug {
    /// Records that `slot` was just filled with new contents.
    fn fill(&mut self, slot: usize);

    /// Records an access to the contents of an occupied `slot`.
    fn update(&mut self, slot: usize);

    /// Forgets `slot`; it is no longer occupied.
    fn remove(&mut self, slot: usize);

    /// Selects the occupied slot to evict, or `None` if nothing is occupied.
    fn get_victim(&mut self) -> Option<usize>;
}

/// Builds the policy implementation selected in the configuration.
pub fn build(kind: config::ReplacementPolicy, capacity: usize) -> Box<dyn ReplacementPolicy> {
    match kind {
        config::ReplacementPolicy::Fifo => Box::new(FifoPolicy::new(capacity)),
        config::ReplacementPolicy::Lru => Box::new(LruPolicy::new(capacity)),
    }
}
