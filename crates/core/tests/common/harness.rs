use std::io::Cursor;

use pagesim_core::common::VirtAddr;
use pagesim_core::config::{Config, ReplacementPolicy};
use pagesim_core::memory::BackingStore;
use pagesim_core::mmu::{Translation, Translator};

/// In-memory backing store used throughout the tests.
pub type MemStore = BackingStore<Cursor<Vec<u8>>>;

/// Deterministic content of byte `offset` in `page`; distinct for neighbouring pages.
pub fn pattern_byte(page: usize, offset: usize) -> u8 {
    (page.wrapping_mul(31) ^ offset) as u8
}

/// Page image of `num_pages` pages filled with [`pattern_byte`].
pub fn pattern_image(num_pages: usize, page_size: usize) -> Vec<u8> {
    (0..num_pages)
        .flat_map(|page| (0..page_size).map(move |offset| pattern_byte(page, offset)))
        .collect()
}

/// Backing store over [`pattern_image`].
pub fn pattern_store(num_pages: usize, page_size: usize) -> MemStore {
    BackingStore::new(Cursor::new(pattern_image(num_pages, page_size)), page_size)
}

/// Configuration with the given geometry and FIFO everywhere.
pub fn small_config(page_size: usize, num_pages: usize, num_frames: usize, tlb: usize) -> Config {
    let mut config = Config::default();
    config.memory.page_size = page_size;
    config.memory.num_pages = num_pages;
    config.memory.num_frames = num_frames;
    config.tlb.capacity = tlb;
    config
}

/// Routes `tracing` output through the test writer; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("pagesim_core=debug")
        .try_init();
}

/// Translator over a pattern image, plus helpers for addressing pages.
#[derive(Debug)]
pub struct TestContext {
    pub translator: Translator<MemStore>,
    pub page_size: usize,
}

impl TestContext {
    pub fn new(config: &Config) -> Self {
        init_tracing();
        let store = pattern_store(config.memory.num_pages, config.memory.page_size);
        let translator = Translator::new(config, store).unwrap();
        Self {
            translator,
            page_size: config.memory.page_size,
        }
    }

    /// Geometry shorthand: FIFO frames and TLB.
    pub fn with_geometry(page_size: usize, num_pages: usize, num_frames: usize, tlb: usize) -> Self {
        Self::new(&small_config(page_size, num_pages, num_frames, tlb))
    }

    /// Same geometry with an explicit frame policy.
    pub fn with_policy(
        page_size: usize,
        num_pages: usize,
        num_frames: usize,
        tlb: usize,
        policy: ReplacementPolicy,
    ) -> Self {
        let mut config = small_config(page_size, num_pages, num_frames, tlb);
        config.memory.policy = policy;
        Self::new(&config)
    }

    /// Logical address of `offset` in `page`.
    pub fn addr(&self, page: usize, offset: usize) -> VirtAddr {
        VirtAddr::new((page * self.page_size + offset) as u64)
    }

    /// Translates and checks invariants afterwards.
    pub fn access(&mut self, page: usize, offset: usize) -> Translation {
        let addr = self.addr(page, offset);
        let t = self.translator.translate(addr).unwrap();
        self.translator.check_invariants().unwrap();
        t
    }
}
