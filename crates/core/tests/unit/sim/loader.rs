//! # Loader Tests
//!
//! Verifies opening backing-store images and address files from disk.

use std::io::Write;

use pagesim_core::VmError;
use pagesim_core::common::VirtAddr;
use pagesim_core::config::{Config, MalformedLinePolicy};
use pagesim_core::memory::PageSource;
use pagesim_core::sim::loader;
use tempfile::NamedTempFile;

use crate::common::harness::{pattern_image, small_config};

fn temp_file(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn opens_backing_store() {
    let config = small_config(64, 4, 2, 2);
    let file = temp_file(&pattern_image(4, 64));
    let mut store = loader::open_backing_store(file.path(), &config).unwrap();
    assert_eq!(store.page_size(), 64);
    assert_eq!(store.read_page(3).unwrap().len(), 64);
}

#[test]
fn undersized_store_opens_but_fails_on_missing_page() {
    let config = small_config(64, 4, 2, 2);
    let file = temp_file(&pattern_image(2, 64));
    let mut store = loader::open_backing_store(file.path(), &config).unwrap();
    assert!(store.read_page(1).is_ok());
    assert!(matches!(store.read_page(2), Err(VmError::BackingStore { page: 2, .. })));
}

#[test]
fn missing_store_is_open_error() {
    let err = loader::open_backing_store("/nonexistent/store.bin", &Config::default()).unwrap_err();
    assert!(matches!(err, VmError::Open { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn loads_trace_file() {
    let file = temp_file(b"16916\n62493\n30198\n");
    let trace = loader::load_trace(file.path(), &Config::default()).unwrap();
    assert_eq!(
        trace.addresses,
        vec![VirtAddr::new(16916), VirtAddr::new(62493), VirtAddr::new(30198)]
    );
}

#[test]
fn trace_file_uses_configured_policy() {
    let file = temp_file(b"1\nbad\n2\n");
    let mut config = Config::default();
    assert!(loader::load_trace(file.path(), &config).is_err());

    config.input.on_malformed = MalformedLinePolicy::Skip;
    let trace = loader::load_trace(file.path(), &config).unwrap();
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.skipped, vec![2]);
}
