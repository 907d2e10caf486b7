//! Default simulator geometry.
//!
//! These values describe the classic 16-bit demand-paging exercise: 256 pages of
//! 256 bytes backed by 256 frames, with a 16-entry TLB. Every one of them can be
//! overridden through [`Config`](crate::config::Config).

/// Size of a page (and of a frame) in bytes.
pub const PAGE_SIZE: usize = 256;

/// Number of logical pages in the address space.
pub const NUM_PAGES: usize = 256;

/// Number of physical frames.
pub const NUM_FRAMES: usize = 256;

/// Number of TLB entries.
pub const TLB_CAPACITY: usize = 16;

/// Width of a logical address as read from the trace.
///
/// Only the low `log2(PAGE_SIZE) + log2(NUM_PAGES)` bits take part in translation.
pub const ADDRESS_BITS: u32 = 32;
