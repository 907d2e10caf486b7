/// Frame allocator.
pub mod frames;

/// Page table forward/reverse bookkeeping.
pub mod page_table;
