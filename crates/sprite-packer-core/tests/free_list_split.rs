use sprite_packer_core::model::Rect;
use sprite_packer_core::packer::{prune_free_list, split_free_rect};

#[test]
fn split_produces_four_clipped_regions() {
    let free = Rect::new(0, 0, 10, 10);
    let placed = Rect::new(2, 2, 4, 4);
    let parts = split_free_rect(&free, &placed).expect("rects overlap");
    assert_eq!(
        parts,
        vec![
            Rect::new(0, 0, 10, 2), // above
            Rect::new(0, 6, 10, 4), // below
            Rect::new(0, 2, 2, 4),  // left
            Rect::new(6, 2, 4, 4),  // right
        ]
    );
}

#[test]
fn split_is_none_without_overlap() {
    let free = Rect::new(0, 0, 10, 10);
    assert!(split_free_rect(&free, &Rect::new(20, 20, 4, 4)).is_none());
    // touching edges are not an overlap
    assert!(split_free_rect(&free, &Rect::new(10, 0, 5, 5)).is_none());
    assert!(split_free_rect(&free, &Rect::new(0, 10, 5, 5)).is_none());
}

#[test]
fn exact_cover_on_one_axis_yields_fewer_children() {
    let free = Rect::new(0, 0, 10, 10);
    // covers the full width, leaves only the strip below
    let parts = split_free_rect(&free, &Rect::new(0, 0, 10, 4)).unwrap();
    assert_eq!(parts, vec![Rect::new(0, 4, 10, 6)]);
    // covers everything, no children at all
    let parts = split_free_rect(&free, &Rect::new(0, 0, 10, 10)).unwrap();
    assert!(parts.is_empty());
}

#[test]
fn prune_removes_contained_entries() {
    let mut free = vec![
        Rect::new(0, 0, 10, 10),
        Rect::new(2, 2, 4, 4),
        Rect::new(0, 0, 10, 10),
        Rect::new(20, 0, 5, 5),
    ];
    prune_free_list(&mut free);
    assert_eq!(free, vec![Rect::new(0, 0, 10, 10), Rect::new(20, 0, 5, 5)]);
}

#[test]
fn prune_is_idempotent() {
    let mut free = vec![
        Rect::new(0, 0, 8, 3),
        Rect::new(0, 0, 3, 8),
        Rect::new(1, 1, 2, 2),
        Rect::new(5, 5, 4, 4),
    ];
    prune_free_list(&mut free);
    let once = free.clone();
    prune_free_list(&mut free);
    assert_eq!(free, once);
}

#[test]
fn overlapping_non_dominated_entries_survive_pruning() {
    let mut free = vec![Rect::new(0, 0, 8, 3), Rect::new(0, 0, 3, 8)];
    prune_free_list(&mut free);
    assert_eq!(free.len(), 2);
}
