//! Backing store.
//!
//! The backing store is a byte-addressable image holding every page of the program.
//! Page `n` lives at byte offset `n * page_size`. Reads are never cached: each call
//! performs a fresh positioned read, and anything short of a full page is an error.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::common::{Result, VmError};

/// Source of page contents for the translator.
///
/// Implemented by [`BackingStore`]; tests substitute their own sources to inject
/// failures or count reads.
pub trait PageSource {
    /// Size of each page in bytes.
    fn page_size(&self) -> usize;

    /// Reads page `page` in full.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::BackingStore`] if the seek fails or fewer than
    /// `page_size` bytes are available.
    fn read_page(&mut self, page: usize) -> Result<Vec<u8>>;
}

/// Backing store over any seekable reader (a file, or an in-memory cursor).
#[derive(Debug)]
pub struct BackingStore<R> {
    inner: R,
    page_size: usize,
}

impl<R: Read + Seek> BackingStore<R> {
    /// Wraps a reader whose contents are the page image.
    pub fn new(inner: R, page_size: usize) -> Self {
        Self { inner, page_size }
    }

    /// Total length of the underlying image in bytes.
    pub fn len(&mut self) -> Result<u64> {
        Ok(self.inner.seek(SeekFrom::End(0))?)
    }

    /// Returns `true` if the image holds no bytes.
    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl BackingStore<File> {
    /// Opens a page image file read-only.
    pub fn open(path: impl AsRef<Path>, page_size: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| VmError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file, page_size))
    }
}

impl<R: Read + Seek> PageSource for BackingStore<R> {
    fn page_size(&self) -> usize {
        self.page_size
    }

    fn read_page(&mut self, page: usize) -> Result<Vec<u8>> {
        let offset = page as u64 * self.page_size as u64;
        let mut buf = vec![0u8; self.page_size];
        self.inner
            .seek(SeekFrom::Start(offset))
            .and_then(|_| self.inner.read_exact(&mut buf))
            .map_err(|source| VmError::BackingStore { page, source })?;
        Ok(buf)
    }
}
