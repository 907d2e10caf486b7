//! File loading.
//!
//! This module opens the two inputs of a run:
//! 1. **Backing store:** The page image, checked against the configured address space size.
//! 2. **Address trace:** The decimal address list, parsed with the configured policy.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{info, warn};

use crate::common::{Result, VmError};
use crate::config::Config;
use crate::memory::BackingStore;

use super::trace::{self, AddressTrace};

/// Opens the backing-store image at `path`.
///
/// An image smaller than `num_pages * page_size` is accepted with a warning;
/// faults on the missing pages fail with [`VmError::BackingStore`].
pub fn open_backing_store(path: impl AsRef<Path>, config: &Config) -> Result<BackingStore<File>> {
    let path = path.as_ref();
    let mut store = BackingStore::open(path, config.memory.page_size)?;
    let len = store.len()?;
    let expected = config.memory.num_pages as u64 * config.memory.page_size as u64;
    if len < expected {
        warn!(
            path = %path.display(),
            len,
            expected,
            "backing store is smaller than the address space"
        );
    }
    Ok(store)
}

/// Reads the address trace at `path`.
pub fn load_trace(path: impl AsRef<Path>, config: &Config) -> Result<AddressTrace> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| VmError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let trace = trace::read_trace(
        BufReader::new(file),
        config.input.on_malformed,
        config.memory.address_bits,
    )?;
    info!(
        path = %path.display(),
        addresses = trace.len(),
        skipped = trace.skipped.len(),
        "loaded address trace"
    );
    Ok(trace)
}
