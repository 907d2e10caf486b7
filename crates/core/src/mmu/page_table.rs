//! Page table.
//!
//! Pure bookkeeping: a forward map from page number to frame and a reverse map from
//! frame to page. Both directions are updated together so the mapping stays injective
//! (no frame ever holds two pages). No eviction policy lives here.

/// Page table with forward (page → frame) and reverse (frame → page) maps.
#[derive(Debug, Clone)]
pub struct PageTable {
    frames: Vec<Option<usize>>,
    occupants: Vec<Option<usize>>,
}

impl PageTable {
    /// Creates an empty table for `num_pages` pages and `num_frames` frames.
    pub fn new(num_pages: usize, num_frames: usize) -> Self {
        Self {
            frames: vec![None; num_pages],
            occupants: vec![None; num_frames],
        }
    }

    /// Number of pages covered by the table.
    pub fn num_pages(&self) -> usize {
        self.frames.len()
    }

    /// Frame holding `page`, or `None` if the page is not resident.
    #[inline]
    pub fn lookup(&self, page: usize) -> Option<usize> {
        self.frames.get(page).copied().flatten()
    }

    /// Page resident in `frame`, or `None` if the frame is free.
    #[inline]
    pub fn occupant(&self, frame: usize) -> Option<usize> {
        self.occupants.get(frame).copied().flatten()
    }

    /// Installs `page → frame` in both directions.
    ///
    /// Any previous frame of `page` is released and any previous occupant of `frame`
    /// is unmapped, so the table stays injective. Returns that displaced occupant;
    /// the caller owns invalidating its cached translations.
    ///
    /// # Panics
    ///
    /// Panics if `page` or `frame` is outside the table.
    pub fn map(&mut self, page: usize, frame: usize) -> Option<usize> {
        if let Some(old_frame) = self.frames[page] {
            self.occupants[old_frame] = None;
        }
        let displaced = self.occupants[frame].take().filter(|&p| p != page);
        if let Some(p) = displaced {
            self.frames[p] = None;
        }
        self.frames[page] = Some(frame);
        self.occupants[frame] = Some(page);
        displaced
    }

    /// Clears the mapping of `page` in both directions and returns the frame it held.
    pub fn unmap(&mut self, page: usize) -> Option<usize> {
        let frame = self.frames.get_mut(page)?.take()?;
        self.occupants[frame] = None;
        Some(frame)
    }

    /// Iterates over resident `(page, frame)` pairs in page order.
    pub fn resident(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.frames
            .iter()
            .enumerate()
            .filter_map(|(page, frame)| frame.map(|f| (page, f)))
    }

    /// Number of resident pages.
    pub fn resident_count(&self) -> usize {
        self.occupants.iter().filter(|o| o.is_some()).count()
    }

    /// Checks that the forward and reverse maps agree.
    pub fn is_consistent(&self) -> bool {
        self.resident().all(|(page, frame)| self.occupant(frame) == Some(page))
            && self
                .occupants
                .iter()
                .enumerate()
                .all(|(frame, occ)| occ.is_none_or(|page| self.lookup(page) == Some(frame)))
    }
}
