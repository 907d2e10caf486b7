use std::io;

use mockall::mock;
use pagesim_core::VmError;
use pagesim_core::memory::PageSource;

mock! {
    /// Page source whose reads are scripted per test.
    pub Source {}

    impl PageSource for Source {
        fn page_size(&self) -> usize;
        fn read_page(&mut self, page: usize) -> pagesim_core::Result<Vec<u8>>;
    }
}

/// Source that serves `fill(page)` for every page of `page_size` bytes.
pub fn filled_source(page_size: usize) -> MockSource {
    let mut source = MockSource::new();
    source.expect_page_size().return_const(page_size);
    source
        .expect_read_page()
        .returning(move |page| Ok(vec![page as u8; page_size]));
    source
}

/// Source that fails every read with an unexpected EOF.
pub fn failing_source(page_size: usize) -> MockSource {
    let mut source = MockSource::new();
    source.expect_page_size().return_const(page_size);
    source.expect_read_page().returning(|page| {
        Err(VmError::BackingStore {
            page,
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "short read"),
        })
    });
    source
}
