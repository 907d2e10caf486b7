//! Logical and physical address types.
//!
//! This module defines strong types for the two address spaces and the layout that
//! connects them. It provides the following:
//! 1. **Type Safety:** Distinguishes logical addresses from physical ones at compile time.
//! 2. **Decomposition:** Splits a logical address into page number and offset.
//! 3. **Composition:** Builds a physical address from a frame number and offset.

use std::fmt;

/// A logical (virtual) address as seen by the simulated program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtAddr(pub u64);

/// A physical address into [`PhysicalMemory`](crate::memory::PhysicalMemory).
///
/// Derived as `(frame << offset_bits) | offset`; never stored by the tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysAddr(pub u64);

impl VirtAddr {
    /// Creates a new logical address from a raw value.
    #[inline(always)]
    pub fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }
}

impl PhysAddr {
    /// Creates a new physical address from a raw value.
    #[inline(always)]
    pub fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VirtAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bit layout of a logical address.
///
/// A logical address is `[ ignored | page number | offset ]`. Bits above
/// `offset_bits + page_bits` are masked off, matching how the trace only
/// carries 16 significant bits inside a 32-bit integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressLayout {
    offset_bits: u32,
    page_bits: u32,
}

impl AddressLayout {
    /// Creates a layout for the given page size and page count.
    ///
    /// Both arguments must be powers of two; [`Config::validate`](crate::config::Config::validate)
    /// guarantees this before a translator is built.
    pub fn new(page_size: usize, num_pages: usize) -> Self {
        Self {
            offset_bits: page_size.trailing_zeros(),
            page_bits: num_pages.trailing_zeros(),
        }
    }

    /// Number of bits used for the page offset.
    #[inline(always)]
    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Number of bits used for the page number.
    #[inline(always)]
    pub fn page_bits(&self) -> u32 {
        self.page_bits
    }

    #[inline(always)]
    fn offset_mask(&self) -> u64 {
        (1u64 << self.offset_bits) - 1
    }

    #[inline(always)]
    fn page_mask(&self) -> u64 {
        (1u64 << self.page_bits) - 1
    }

    /// Splits a logical address into `(page_number, offset)`.
    ///
    /// ```
    /// use pagesim_core::common::{AddressLayout, VirtAddr};
    ///
    /// let layout = AddressLayout::new(256, 256);
    /// assert_eq!(layout.split(VirtAddr::new(16916)), (66, 20));
    /// ```
    #[inline(always)]
    pub fn split(&self, addr: VirtAddr) -> (usize, usize) {
        let page = (addr.val() >> self.offset_bits) & self.page_mask();
        let offset = addr.val() & self.offset_mask();
        (page as usize, offset as usize)
    }

    /// Builds the physical address of `offset` inside `frame`.
    #[inline(always)]
    pub fn compose(&self, frame: usize, offset: usize) -> PhysAddr {
        PhysAddr::new(((frame as u64) << self.offset_bits) | (offset as u64 & self.offset_mask()))
    }
}
