//! Simulator: owns the translator and the statistics side-by-side.
//!
//! Each address is processed to completion before the next one starts. Every
//! translation is recorded in the statistics and written to the report sink as
//! `Virtual address: A Physical address: P Value: V`.

use std::io::Write;

use tracing::info;

use crate::common::{Result, VirtAddr};
use crate::config::Config;
use crate::memory::PageSource;
use crate::mmu::{Translation, Translator};
use crate::stats::TranslationStats;

/// Top-level simulator: translator state plus run statistics.
#[derive(Debug)]
pub struct Simulator<S> {
    /// Translation engine.
    pub translator: Translator<S>,
    /// Statistics accumulated so far.
    pub stats: TranslationStats,
}

impl<S: PageSource> Simulator<S> {
    /// Creates a simulator with empty tables over `store`.
    pub fn new(config: &Config, store: S) -> Result<Self> {
        Ok(Self {
            translator: Translator::new(config, store)?,
            stats: TranslationStats::default(),
        })
    }

    /// Translates one address and records it.
    pub fn step(&mut self, addr: VirtAddr) -> Result<Translation> {
        let t = self.translator.translate(addr)?;
        self.stats.record(&t);
        Ok(t)
    }

    /// Runs every address in order, writing one report line per address to `out`.
    ///
    /// Stops at the first error; statistics cover the addresses completed before it.
    pub fn run<W: Write>(&mut self, addresses: &[VirtAddr], out: &mut W) -> Result<&TranslationStats> {
        info!(addresses = addresses.len(), "starting run");
        for &addr in addresses {
            let t = self.step(addr)?;
            write_translation(out, &t)?;
        }
        info!(
            faults = self.stats.page_faults,
            tlb_hits = self.stats.tlb_hits,
            evictions = self.stats.evictions,
            "run complete"
        );
        Ok(&self.stats)
    }
}

/// Writes the report line for one translation.
pub fn write_translation<W: Write>(out: &mut W, t: &Translation) -> std::io::Result<()> {
    writeln!(
        out,
        "Virtual address: {} Physical address: {} Value: {}",
        t.logical, t.physical, t.value
    )
}
