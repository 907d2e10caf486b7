//! Page Table Unit Tests.
//!
//! Verifies forward/reverse mapping, unmapping, and injectivity on overwrite.

use pagesim_core::mmu::page_table::PageTable;

#[test]
fn empty_table_has_no_mappings() {
    let pt = PageTable::new(8, 4);
    assert_eq!(pt.num_pages(), 8);
    for page in 0..8 {
        assert_eq!(pt.lookup(page), None);
    }
    for frame in 0..4 {
        assert_eq!(pt.occupant(frame), None);
    }
    assert_eq!(pt.resident_count(), 0);
    assert!(pt.is_consistent());
}

#[test]
fn map_sets_both_directions() {
    let mut pt = PageTable::new(8, 4);
    assert_eq!(pt.map(5, 2), None);
    assert_eq!(pt.lookup(5), Some(2));
    assert_eq!(pt.occupant(2), Some(5));
    assert_eq!(pt.resident_count(), 1);
    assert!(pt.is_consistent());
}

#[test]
fn unmap_clears_both_directions() {
    let mut pt = PageTable::new(8, 4);
    pt.map(5, 2);
    assert_eq!(pt.unmap(5), Some(2));
    assert_eq!(pt.lookup(5), None);
    assert_eq!(pt.occupant(2), None);
    assert_eq!(pt.unmap(5), None);
    assert!(pt.is_consistent());
}

#[test]
fn unmap_out_of_range_is_none() {
    let mut pt = PageTable::new(8, 4);
    assert_eq!(pt.unmap(100), None);
    assert_eq!(pt.lookup(100), None);
}

#[test]
fn map_onto_occupied_frame_displaces_occupant() {
    let mut pt = PageTable::new(8, 4);
    pt.map(1, 0);
    assert_eq!(pt.map(6, 0), Some(1));
    assert_eq!(pt.lookup(1), None);
    assert_eq!(pt.lookup(6), Some(0));
    assert_eq!(pt.occupant(0), Some(6));
    assert!(pt.is_consistent());
}

#[test]
fn remapping_page_releases_old_frame() {
    let mut pt = PageTable::new(8, 4);
    pt.map(3, 0);
    assert_eq!(pt.map(3, 1), None);
    assert_eq!(pt.occupant(0), None);
    assert_eq!(pt.occupant(1), Some(3));
    assert_eq!(pt.resident_count(), 1);
    assert!(pt.is_consistent());
}

#[test]
fn resident_lists_pairs_in_page_order() {
    let mut pt = PageTable::new(8, 4);
    pt.map(7, 0);
    pt.map(2, 1);
    pt.map(4, 3);
    let pairs: Vec<_> = pt.resident().collect();
    assert_eq!(pairs, vec![(2, 1), (4, 3), (7, 0)]);
}
