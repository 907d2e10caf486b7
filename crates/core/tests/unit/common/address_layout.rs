//! Address Layout Tests.
//!
//! Verifies page/offset decomposition and physical address composition.

use pagesim_core::common::{AddressLayout, PhysAddr, VirtAddr};
use rstest::rstest;

#[rstest]
#[case(0, (0, 0))]
#[case(1, (0, 1))]
#[case(255, (0, 255))]
#[case(256, (1, 0))]
#[case(16916, (66, 20))]
#[case(62493, (244, 29))]
#[case(65535, (255, 255))]
fn split_default_layout(#[case] addr: u64, #[case] expected: (usize, usize)) {
    let layout = AddressLayout::new(256, 256);
    assert_eq!(layout.split(VirtAddr::new(addr)), expected);
}

#[test]
fn high_bits_are_ignored() {
    let layout = AddressLayout::new(256, 256);
    // Only the low 16 bits are significant in a 32-bit address.
    assert_eq!(layout.split(VirtAddr::new(0xABCD_0102)), (1, 2));
}

#[test]
fn bit_widths() {
    let layout = AddressLayout::new(1024, 64);
    assert_eq!(layout.offset_bits(), 10);
    assert_eq!(layout.page_bits(), 6);
}

#[test]
fn compose_places_frame_above_offset() {
    let layout = AddressLayout::new(256, 256);
    assert_eq!(layout.compose(0, 0), PhysAddr::new(0));
    assert_eq!(layout.compose(3, 17), PhysAddr::new(3 * 256 + 17));
    assert_eq!(layout.compose(255, 255).val(), 65535);
}

#[test]
fn compose_inverts_split_for_identity_frames() {
    let layout = AddressLayout::new(64, 16);
    for raw in 0..(64 * 16) {
        let (page, offset) = layout.split(VirtAddr::new(raw));
        assert_eq!(layout.compose(page, offset).val(), raw);
    }
}

#[test]
fn display_is_decimal() {
    assert_eq!(VirtAddr::new(16916).to_string(), "16916");
    assert_eq!(PhysAddr::new(20).to_string(), "20");
}
