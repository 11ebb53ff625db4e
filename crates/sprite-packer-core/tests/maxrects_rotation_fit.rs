use sprite_packer_core::config::{Heuristic, PackerConfig};
use sprite_packer_core::model::RectNode;
use sprite_packer_core::packer::MaxRectsPacker;

fn cfg(allow_rotation: bool) -> PackerConfig {
    PackerConfig {
        width: 50,
        height: 100,
        padding_x: 0,
        padding_y: 0,
        allow_rotation,
    }
}

#[test]
fn rotates_when_only_rotated_fits() {
    let mut p = MaxRectsPacker::new(cfg(true)).unwrap();
    let result = p
        .pack(vec![RectNode::new(0, 80, 20)], Heuristic::BestShortSideFit)
        .unwrap();

    assert!(result.not_placed.is_empty());
    let node = &result.placed[0];
    assert!(node.rotated, "should rotate because only rotated fits");
    assert_eq!(node.rect.w, 20);
    assert_eq!(node.rect.h, 80);
    assert!(node.rect.right() <= 50 && node.rect.bottom() <= 100);
}

#[test]
fn wide_rect_stays_unplaced_without_rotation() {
    let mut p = MaxRectsPacker::new(cfg(false)).unwrap();
    let result = p
        .pack(vec![RectNode::new(0, 80, 20)], Heuristic::BestShortSideFit)
        .unwrap();

    assert!(result.placed.is_empty());
    assert_eq!(result.not_placed.len(), 1);
    assert!(!result.not_placed[0].rotated);
}

#[test]
fn square_is_not_flagged_rotated() {
    let mut p = MaxRectsPacker::new(cfg(true)).unwrap();
    let result = p
        .pack(vec![RectNode::new(0, 30, 30)], Heuristic::BestAreaFit)
        .unwrap();
    assert!(!result.placed[0].rotated);
}
