//! Demand-paging virtual memory simulator library.
//!
//! This crate resolves a stream of logical addresses to physical locations with the following:
//! 1. **Common:** Address newtypes, the address layout, defaults, and the error type.
//! 2. **Memory:** The read-only backing store and the fixed set of physical frames.
//! 3. **MMU:** Page table, TLB, frame allocator, replacement policies, and the translator.
//! 4. **Simulation:** Address trace parsing, file loading, and the run loop.
//! 5. **Statistics:** Fault and hit counters with derived rates.

/// Common types and constants (addresses, layout, errors).
pub mod common;
/// Simulator configuration (defaults, enums, validation, JSON loading).
pub mod config;
/// Backing store and physical memory.
pub mod memory;
/// Address translation (page table, TLB, replacement, translator).
pub mod mmu;
/// Trace parsing, file loading, and the simulation driver.
pub mod sim;
/// Translation statistics collection and reporting.
pub mod stats;

/// Crate-wide result alias.
pub use crate::common::error::Result;
/// Error type shared by every component.
pub use crate::common::error::VmError;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Translation engine; owns the page table, TLB, frames and backing store.
pub use crate::mmu::Translator;
/// Run loop over an address trace.
pub use crate::sim::Simulator;
