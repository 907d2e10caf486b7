//! Translation statistics collection and reporting.
//!
//! This module tallies the outcome of every translation. It provides:
//! 1. **Counters:** Addresses, page faults, TLB hits, page-table hits, and evictions.
//! 2. **Rates:** Fault rate and TLB hit rate over all addresses.
//! 3. **Reporting:** The end-of-run summary block, as text or JSON.
//!
//! Collection is purely observational; it never influences translation.

use std::io::{self, Write};

use crate::mmu::{AccessKind, Translation};

/// Translation statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationStats {
    /// Logical addresses translated.
    pub addresses: u64,
    /// Translations that required a page-in.
    pub page_faults: u64,
    /// Translations resolved by the TLB.
    pub tlb_hits: u64,
    /// Translations resolved by the page table after a TLB miss.
    pub table_hits: u64,
    /// Page-ins that reclaimed an occupied frame.
    pub evictions: u64,
}

impl TranslationStats {
    /// Records one translation.
    pub fn record(&mut self, t: &Translation) {
        self.addresses += 1;
        match t.kind {
            AccessKind::TlbHit => self.tlb_hits += 1,
            AccessKind::TableHit => self.table_hits += 1,
            AccessKind::PageFault => self.page_faults += 1,
        }
        if t.evicted.is_some() {
            self.evictions += 1;
        }
    }

    /// Translations that did not fault.
    pub fn non_faults(&self) -> u64 {
        self.addresses - self.page_faults
    }

    /// `page_faults / addresses`, or `0.0` before any address.
    pub fn fault_rate(&self) -> f64 {
        ratio(self.page_faults, self.addresses)
    }

    /// `tlb_hits / addresses`, or `0.0` before any address.
    pub fn tlb_hit_rate(&self) -> f64 {
        ratio(self.tlb_hits, self.addresses)
    }

    /// Writes the summary block.
    ///
    /// ```text
    /// Page Faults: 5
    /// Addresses Translated: 5
    /// Page Fault Rate: 1.000
    /// TLB Hits: 0
    /// TLB Hit Rate: 0.000
    /// ```
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Page Faults: {}", self.page_faults)?;
        writeln!(out, "Addresses Translated: {}", self.addresses)?;
        writeln!(out, "Page Fault Rate: {:.3}", self.fault_rate())?;
        writeln!(out, "TLB Hits: {}", self.tlb_hits)?;
        writeln!(out, "TLB Hit Rate: {:.3}", self.tlb_hit_rate())
    }

    /// Writes counters and rates as a single JSON object.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let value = serde_json::json!({
            "addresses": self.addresses,
            "page_faults": self.page_faults,
            "fault_rate": self.fault_rate(),
            "tlb_hits": self.tlb_hits,
            "tlb_hit_rate": self.tlb_hit_rate(),
            "table_hits": self.table_hits,
            "evictions": self.evictions,
        });
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)
    }
}

fn ratio(n: u64, d: u64) -> f64 {
    if d == 0 { 0.0 } else { n as f64 / d as f64 }
}
