//! Frame allocation.
//!
//! Hands out free frames in ascending order until physical memory is full, then
//! falls back to the replacement policy to choose an occupied frame to reclaim.

use std::collections::VecDeque;

use crate::config;

use super::policies::{self, ReplacementPolicy};

/// Frame chosen for an incoming page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameGrant {
    /// A never-used frame.
    Free(usize),
    /// An occupied frame that must be evicted before reuse.
    Victim(usize),
}

impl FrameGrant {
    /// The frame number, regardless of how it was obtained.
    pub fn frame(self) -> usize {
        match self {
            Self::Free(f) | Self::Victim(f) => f,
        }
    }
}

/// Free list plus eviction policy over physical frames.
#[derive(Debug)]
pub struct FrameAllocator {
    free: VecDeque<usize>,
    policy: Box<dyn ReplacementPolicy>,
}

impl FrameAllocator {
    /// Creates an allocator with all `num_frames` frames free.
    pub fn new(num_frames: usize, policy: config::ReplacementPolicy) -> Self {
        Self {
            free: (0..num_frames).collect(),
            policy: policies::build(policy, num_frames),
        }
    }

    /// Number of frames never handed out (or released since).
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Picks the frame for the next page-in.
    ///
    /// Returns `None` only when there are no frames at all.
    pub fn allocate(&mut self) -> Option<FrameGrant> {
        if let Some(frame) = self.free.pop_front() {
            return Some(FrameGrant::Free(frame));
        }
        self.policy.get_victim().map(FrameGrant::Victim)
    }

    /// Records that `frame` now holds a freshly loaded page.
    pub fn filled(&mut self, frame: usize) {
        self.policy.fill(frame);
    }

    /// Records a translation that resolved to `frame`.
    pub fn touch(&mut self, frame: usize) {
        self.policy.update(frame);
    }

    /// Returns `frame` to the free list, ahead of frames never used.
    pub fn release(&mut self, frame: usize) {
        self.policy.remove(frame);
        if !self.free.contains(&frame) {
            self.free.push_front(frame);
        }
    }
}
