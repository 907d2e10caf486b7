//! Simulation driver.
//!
//! This module connects the translator to the outside world:
//! 1. **Trace:** Parses the decimal address list, applying the malformed-line policy.
//! 2. **Loader:** Opens the backing-store image and the address file.
//! 3. **Simulator:** Runs a trace through the translator, reporting each address and the totals.

/// Backing-store and trace file loading.
pub mod loader;

/// Run loop over an address trace.
pub mod simulator;

/// Address trace parsing.
pub mod trace;

pub use simulator::Simulator;
pub use trace::AddressTrace;
