use rand::{Rng, SeedableRng};
use sprite_packer_core::config::{Heuristic, PackerConfig};
use sprite_packer_core::model::RectNode;
use sprite_packer_core::packer::MaxRectsPacker;

fn cfg() -> PackerConfig {
    PackerConfig {
        width: 512,
        height: 512,
        padding_x: 0,
        padding_y: 0,
        allow_rotation: true,
    }
}

fn random_rects(seed: u64, n: usize) -> Vec<RectNode> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let w = rng.gen_range(4..=64);
            let h = rng.gen_range(4..=64);
            RectNode::new(i, w, h)
        })
        .collect()
}

#[test]
fn repeatable_and_disjoint() {
    let rects = random_rects(42, 120);

    let mut p1 = MaxRectsPacker::new(cfg()).unwrap();
    let r1 = p1.pack(rects.clone(), Heuristic::BestAreaFit).unwrap();
    let mut p2 = MaxRectsPacker::new(cfg()).unwrap();
    let r2 = p2.pack(rects.clone(), Heuristic::BestAreaFit).unwrap();

    assert_eq!(r1, r2);

    // placement invariants on the same run
    for i in 0..r1.placed.len() {
        let a = &r1.placed[i];
        assert!(a.rect.right() <= 512 && a.rect.bottom() <= 512);
        for b in &r1.placed[i + 1..] {
            assert!(!a.rect.intersects(&b.rect), "{:?} overlaps {:?}", a, b);
        }
    }

    // every input index comes back exactly once
    let mut indices: Vec<usize> = r1
        .placed
        .iter()
        .chain(r1.not_placed.iter())
        .map(|n| n.index)
        .collect();
    indices.sort();
    assert_eq!(indices, (0..rects.len()).collect::<Vec<_>>());
}
