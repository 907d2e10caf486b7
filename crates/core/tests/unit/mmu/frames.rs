//! Frame Allocator Tests.
//!
//! Verifies free-frame handout order and fallback to the eviction policy.

use pagesim_core::config::ReplacementPolicy;
use pagesim_core::mmu::frames::{FrameAllocator, FrameGrant};

#[test]
fn free_frames_ascend() {
    let mut frames = FrameAllocator::new(3, ReplacementPolicy::Fifo);
    assert_eq!(frames.free_count(), 3);
    for expected in 0..3 {
        let grant = frames.allocate().unwrap();
        assert_eq!(grant, FrameGrant::Free(expected));
        frames.filled(grant.frame());
    }
    assert_eq!(frames.free_count(), 0);
}

#[test]
fn full_memory_falls_back_to_fifo_victims() {
    let mut frames = FrameAllocator::new(2, ReplacementPolicy::Fifo);
    for _ in 0..2 {
        let f = frames.allocate().unwrap().frame();
        frames.filled(f);
    }
    let mut victims = Vec::new();
    for _ in 0..4 {
        let grant = frames.allocate().unwrap();
        assert!(matches!(grant, FrameGrant::Victim(_)));
        victims.push(grant.frame());
        frames.filled(grant.frame());
    }
    assert_eq!(victims, vec![0, 1, 0, 1]);
}

#[test]
fn lru_victim_follows_touches() {
    let mut frames = FrameAllocator::new(3, ReplacementPolicy::Lru);
    for _ in 0..3 {
        let f = frames.allocate().unwrap().frame();
        frames.filled(f);
    }
    frames.touch(0);
    frames.touch(2);
    assert_eq!(frames.allocate(), Some(FrameGrant::Victim(1)));
}

#[test]
fn released_frame_is_reused_first() {
    let mut frames = FrameAllocator::new(4, ReplacementPolicy::Fifo);
    for _ in 0..2 {
        let f = frames.allocate().unwrap().frame();
        frames.filled(f);
    }
    frames.release(0);
    assert_eq!(frames.free_count(), 3);
    assert_eq!(frames.allocate(), Some(FrameGrant::Free(0)));
    assert_eq!(frames.allocate(), Some(FrameGrant::Free(2)));
}

#[test]
fn no_frames_no_grant() {
    let mut frames = FrameAllocator::new(0, ReplacementPolicy::Fifo);
    assert_eq!(frames.allocate(), None);
}
