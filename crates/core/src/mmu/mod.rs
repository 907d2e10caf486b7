//! Address translation.
//!
//! This module implements the translation engine, responsible for resolving a
//! logical address to a physical location. A lookup goes TLB first, then page
//! table, and on a full miss demand-loads the page from the backing store,
//! evicting an occupied frame if physical memory is full.
//!
//! After every call to [`Translator::translate`] the page table, TLB and physical
//! memory agree: each resident page's frame holds it, and any TLB entry for that
//! page names the same frame.

/// Frame allocation (free list and eviction).
pub mod frames;

/// Forward and reverse page mapping.
pub mod page_table;

/// Replacement policies shared by frames and TLB slots.
pub mod policies;

/// Translation Lookaside Buffer.
pub mod tlb;

use std::fmt;
use std::io;

use tracing::debug;

use crate::common::{AddressLayout, PhysAddr, Result, VirtAddr, VmError};
use crate::config::Config;
use crate::memory::{PageSource, PhysicalMemory};

use self::frames::{FrameAllocator, FrameGrant};
use self::page_table::PageTable;
use self::tlb::Tlb;

/// How a translation was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// Found in the TLB.
    TlbHit,
    /// TLB miss, found in the page table.
    TableHit,
    /// Neither had it; the page was loaded from the backing store.
    PageFault,
}

impl AccessKind {
    /// Short lowercase label, as used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TlbHit => "tlb-hit",
            Self::TableHit => "table-hit",
            Self::PageFault => "fault",
        }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of translating one logical address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    /// Address that was translated.
    pub logical: VirtAddr,
    /// Resulting physical address.
    pub physical: PhysAddr,
    /// Page number of `logical`.
    pub page: usize,
    /// Offset within the page.
    pub offset: usize,
    /// Frame holding the page.
    pub frame: usize,
    /// Byte stored at the physical address, as a signed value.
    pub value: i8,
    /// How the translation was resolved.
    pub kind: AccessKind,
    /// Page evicted to make room, if this was a fault on a full memory.
    pub evicted: Option<usize>,
}

impl Translation {
    /// Whether the TLB supplied the frame.
    pub fn is_tlb_hit(&self) -> bool {
        self.kind == AccessKind::TlbHit
    }

    /// Whether the page had to be loaded.
    pub fn is_fault(&self) -> bool {
        self.kind == AccessKind::PageFault
    }
}

/// Translation engine owning the page table, TLB, frames, and backing store.
#[derive(Debug)]
pub struct Translator<S> {
    layout: AddressLayout,
    page_table: PageTable,
    tlb: Tlb,
    frames: FrameAllocator,
    memory: PhysicalMemory,
    store: S,
    trace: bool,
}

impl<S: PageSource> Translator<S> {
    /// Builds a translator with empty tables over the given backing store.
    ///
    /// # Errors
    ///
    /// [`VmError::InvalidConfig`] if the configuration fails validation or the
    /// store's page size differs from the configured one.
    pub fn new(config: &Config, store: S) -> Result<Self> {
        config.validate()?;
        let mem = &config.memory;
        if store.page_size() != mem.page_size {
            return Err(VmError::InvalidConfig(format!(
                "backing store page size {} does not match configured page size {}",
                store.page_size(),
                mem.page_size
            )));
        }

        Ok(Self {
            layout: AddressLayout::new(mem.page_size, mem.num_pages),
            page_table: PageTable::new(mem.num_pages, mem.num_frames),
            tlb: Tlb::new(config.tlb.capacity, config.tlb.policy),
            frames: FrameAllocator::new(mem.num_frames, mem.policy),
            memory: PhysicalMemory::new(mem.num_frames, mem.page_size),
            store,
            trace: config.general.trace_translations,
        })
    }

    /// Translates one logical address and reads the byte it names.
    ///
    /// # Errors
    ///
    /// [`VmError::BackingStore`] if a fault cannot load a full page; the tables are
    /// left unchanged in that case. [`VmError::InvalidFrameAccess`] only if the
    /// internal tables have been corrupted.
    pub fn translate(&mut self, addr: VirtAddr) -> Result<Translation> {
        let (page, offset) = self.layout.split(addr);

        let (frame, kind, evicted) = if let Some(frame) = self.tlb.lookup(page) {
            debug_assert_eq!(
                self.page_table.lookup(page),
                Some(frame),
                "stale TLB entry for page {page}"
            );
            (frame, AccessKind::TlbHit, None)
        } else if let Some(frame) = self.page_table.lookup(page) {
            let _ = self.tlb.insert(page, frame);
            (frame, AccessKind::TableHit, None)
        } else {
            let (frame, evicted) = self.page_in(page)?;
            (frame, AccessKind::PageFault, evicted)
        };

        self.frames.touch(frame);

        debug_assert!(
            frame < self.memory.num_frames() && offset < self.memory.page_size(),
            "frame {frame} offset {offset} outside physical memory"
        );
        let byte = self.memory.read_byte(frame, offset)?;
        let physical = self.layout.compose(frame, offset);

        if self.trace {
            debug!(
                logical = addr.val(),
                page,
                offset,
                frame,
                physical = physical.val(),
                kind = kind.as_str(),
                "translated"
            );
        }

        Ok(Translation {
            logical: addr,
            physical,
            page,
            offset,
            frame,
            value: byte as i8,
            kind,
            evicted,
        })
    }

    /// Demand-loads `page`, returning its new frame and the page evicted for it.
    fn page_in(&mut self, page: usize) -> Result<(usize, Option<usize>)> {
        let bytes = self.store.read_page(page)?;
        if bytes.len() != self.memory.page_size() {
            return Err(VmError::BackingStore {
                page,
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "read {} bytes, expected {}",
                        bytes.len(),
                        self.memory.page_size()
                    ),
                ),
            });
        }

        let grant = self
            .frames
            .allocate()
            .ok_or_else(|| VmError::InvariantViolation("no physical frames to allocate".into()))?;
        let frame = grant.frame();

        let evicted = match grant {
            FrameGrant::Free(_) => None,
            FrameGrant::Victim(_) => self.page_table.occupant(frame),
        };
        if let Some(victim) = evicted {
            let _ = self.page_table.unmap(victim);
            let _ = self.tlb.invalidate(victim);
            debug!(victim, frame, incoming = page, "evicting page");
        }

        self.memory.load_page(frame, &bytes)?;
        if let Some(displaced) = self.page_table.map(page, frame) {
            let _ = self.tlb.invalidate(displaced);
            return Err(VmError::InvariantViolation(format!(
                "frame {frame} was still mapped to page {displaced} during page-in of {page}"
            )));
        }
        let _ = self.tlb.insert(page, frame);
        self.frames.filled(frame);

        Ok((frame, evicted))
    }

    /// Forces `page` out of memory, returning the frame it occupied.
    ///
    /// The frame goes back to the free list and any TLB entry for the page is dropped.
    pub fn evict(&mut self, page: usize) -> Option<usize> {
        let frame = self.page_table.unmap(page)?;
        let _ = self.tlb.invalidate(page);
        self.frames.release(frame);
        debug!(page, frame, "evicted on request");
        Some(frame)
    }

    /// Verifies injectivity, TLB coherence and the capacity bound.
    ///
    /// # Errors
    ///
    /// [`VmError::InvariantViolation`] describing the first disagreement found.
    pub fn check_invariants(&self) -> Result<()> {
        if !self.page_table.is_consistent() {
            return Err(VmError::InvariantViolation(
                "page table forward and reverse maps disagree".into(),
            ));
        }
        let resident = self.page_table.resident_count();
        if resident > self.memory.num_frames() {
            return Err(VmError::InvariantViolation(format!(
                "{resident} resident pages exceed {} frames",
                self.memory.num_frames()
            )));
        }
        for (page, frame) in self.tlb.entries() {
            if self.page_table.lookup(page) != Some(frame) {
                return Err(VmError::InvariantViolation(format!(
                    "TLB maps page {page} to frame {frame} but page table has {:?}",
                    self.page_table.lookup(page)
                )));
            }
        }
        Ok(())
    }

    /// Read-only view of the page table.
    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    /// Read-only view of the TLB.
    pub fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    /// Read-only view of physical memory.
    pub fn memory(&self) -> &PhysicalMemory {
        &self.memory
    }

    /// Number of frames not yet holding a page.
    pub fn free_frames(&self) -> usize {
        self.frames.free_count()
    }
}
