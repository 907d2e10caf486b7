//! Translation Lookaside Buffer (TLB).
//!
//! A small fully associative cache of page → frame mappings, consulted before the
//! page table. Entries are replaced through a [`ReplacementPolicy`]: an invalidated
//! slot is refilled first, and once every slot is valid the policy picks the victim
//! (FIFO by fill order by default).

use crate::config;

use super::policies::{self, ReplacementPolicy};

/// A single entry in the TLB.
#[derive(Clone, Copy, Debug, Default)]
struct TlbEntry {
    /// Page number (tag).
    page: usize,
    /// Frame number (data).
    frame: usize,
    /// Entry validity flag.
    valid: bool,
}

/// Translation Lookaside Buffer structure.
#[derive(Debug)]
pub struct Tlb {
    /// Fixed set of entry slots.
    entries: Vec<TlbEntry>,
    /// Slot replacement policy.
    policy: Box<dyn ReplacementPolicy>,
}

impl Tlb {
    /// Creates a TLB with `capacity` entries and the given replacement policy.
    ///
    /// A capacity of zero yields a disabled TLB that always misses.
    pub fn new(capacity: usize, policy: config::ReplacementPolicy) -> Self {
        Self {
            entries: vec![TlbEntry::default(); capacity],
            policy: policies::build(policy, capacity),
        }
    }

    /// Number of entry slots.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of valid entries.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.valid).count()
    }

    /// Returns `true` if no entry is valid.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot_of(&self, page: usize) -> Option<usize> {
        self.entries.iter().position(|e| e.valid && e.page == page)
    }

    /// Looks up `page`, returning its frame on a hit.
    ///
    /// A hit counts as a use for the replacement policy.
    pub fn lookup(&mut self, page: usize) -> Option<usize> {
        let slot = self.slot_of(page)?;
        self.policy.update(slot);
        Some(self.entries[slot].frame)
    }

    /// Returns the cached frame for `page` without touching replacement state.
    pub fn peek(&self, page: usize) -> Option<usize> {
        self.slot_of(page).map(|slot| self.entries[slot].frame)
    }

    /// Inserts `page → frame`, returning the page whose entry was evicted to make room.
    ///
    /// An existing entry for `page` is updated in place.
    pub fn insert(&mut self, page: usize, frame: usize) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }

        let (slot, evicted) = if let Some(slot) = self.slot_of(page) {
            (slot, None)
        } else if let Some(free) = self.entries.iter().position(|e| !e.valid) {
            (free, None)
        } else {
            let victim = self.policy.get_victim().unwrap_or(0);
            (victim, Some(self.entries[victim].page))
        };

        self.entries[slot] = TlbEntry {
            page,
            frame,
            valid: true,
        };
        self.policy.fill(slot);
        evicted
    }

    /// Removes any entry for `page`. Returns `true` if one was present.
    pub fn invalidate(&mut self, page: usize) -> bool {
        match self.slot_of(page) {
            Some(slot) => {
                self.entries[slot].valid = false;
                self.policy.remove(slot);
                true
            }
            None => false,
        }
    }

    /// Invalidates every entry.
    pub fn flush(&mut self) {
        for (slot, e) in self.entries.iter_mut().enumerate() {
            if e.valid {
                e.valid = false;
                self.policy.remove(slot);
            }
        }
    }

    /// Iterates over valid `(page, frame)` entries in slot order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries
            .iter()
            .filter(|e| e.valid)
            .map(|e| (e.page, e.frame))
    }
}
