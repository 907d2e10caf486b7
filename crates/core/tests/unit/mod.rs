//! # Unit Components
//!
//! Tests grouped by the module they exercise.




/// Page table, TLB, policies, frame allocation and the translator.
pub mod mmu;

/// Trace parsing, loading and the run loop.
pub mod sim;
