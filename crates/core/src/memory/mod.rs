//! Memory subsystem.
//!
//! This module contains the two storage levels below the translator:
//! 1. **Backing Store:** The read-only, disk-resident program image, read one page at a time.
//! 2. **Physical Memory:** A fixed number of page-sized frames filled on page-in.

/// Read-only page source modelling the program image on disk.
pub mod backing_store;

/// Fixed set of physical frames.
pub mod physical;

pub use backing_store::{BackingStore, PageSource};
pub use physical::PhysicalMemory;
