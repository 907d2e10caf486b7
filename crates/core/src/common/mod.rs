//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Address Types:** Strong types for logical and physical addresses.
//! 2. **Address Layout:** Splitting logical addresses into page and offset, and composing physical ones.
//! 3. **Constants:** Default geometry for pages, frames, and the TLB.
//! 4. **Error Handling:** The shared error enum and result alias.

/// Address types and the page/offset layout.
pub mod addr;

/// Default geometry constants.
pub mod constants;

/// Error type and result alias.
pub mod error;

pub use addr::{AddressLayout, PhysAddr, VirtAddr};
pub use error::{Result, VmError};
