//! Physical memory.
//!
//! A flat buffer of `num_frames * page_size` bytes, allocated once for the whole run.
//! Whether a frame is free or occupied is not tracked here; the page table's reverse
//! map is the authority, kept in lock-step by the translator.

use crate::common::{Result, VmError};

/// Fixed set of page-sized frames.
#[derive(Debug, Clone)]
pub struct PhysicalMemory {
    data: Vec<u8>,
    page_size: usize,
    num_frames: usize,
}

impl PhysicalMemory {
    /// Allocates `num_frames` zeroed frames of `page_size` bytes.
    pub fn new(num_frames: usize, page_size: usize) -> Self {
        Self {
            data: vec![0; num_frames * page_size],
            page_size,
            num_frames,
        }
    }

    /// Number of frames.
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Bytes per frame.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Overwrites the contents of `frame` with a page image.
    ///
    /// # Errors
    ///
    /// [`VmError::InvalidFrameAccess`] if the frame is out of range or `bytes`
    /// is not exactly one page long.
    pub fn load_page(&mut self, frame: usize, bytes: &[u8]) -> Result<()> {
        if frame >= self.num_frames || bytes.len() != self.page_size {
            return Err(VmError::InvalidFrameAccess {
                frame,
                offset: bytes.len(),
            });
        }
        let base = frame * self.page_size;
        self.data[base..base + self.page_size].copy_from_slice(bytes);
        Ok(())
    }

    /// Reads the byte at `offset` inside `frame`.
    pub fn read_byte(&self, frame: usize, offset: usize) -> Result<u8> {
        if frame >= self.num_frames || offset >= self.page_size {
            return Err(VmError::InvalidFrameAccess { frame, offset });
        }
        Ok(self.data[frame * self.page_size + offset])
    }

    /// Borrows the full contents of `frame`.
    pub fn frame(&self, frame: usize) -> Result<&[u8]> {
        if frame >= self.num_frames {
            return Err(VmError::InvalidFrameAccess { frame, offset: 0 });
        }
        let base = frame * self.page_size;
        Ok(&self.data[base..base + self.page_size])
    }
}
