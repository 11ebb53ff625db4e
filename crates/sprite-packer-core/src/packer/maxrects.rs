use crate::config::{Heuristic, PackerConfig};
use crate::error::{PackError, Result};
use crate::model::{PackResult, Rect, RectNode};

/// MaxRects bin packer.
///
/// Tracks the unoccupied space inside the bin as a list of candidate free
/// rects; every placement splits the intersected entries and prunes dominated
/// leftovers. Entries may overlap each other, the list is not a tiling.
/// One instance performs one packing run over a fixed bin.
#[derive(Debug)]
pub struct MaxRectsPacker {
    config: PackerConfig,
    used: Vec<RectNode>,
    free: Vec<Rect>,
}

/// A scored placement candidate. Lower is better in both score components;
/// their meaning depends on the heuristic.
#[derive(Debug, Clone, Copy)]
struct Placement {
    rect: Rect,
    rotated: bool,
    score: (i64, i64),
}

impl MaxRectsPacker {
    pub fn new(config: PackerConfig) -> Result<Self> {
        config.validate()?;
        let free = vec![Rect::new(0, 0, config.width, config.height)];
        Ok(Self {
            config,
            used: Vec::new(),
            free,
        })
    }

    /// Packs `rects`, consuming them. Rects that fit come back in `placed`
    /// with their final position, padded size and rotation flag; the rest
    /// come back unchanged in `not_placed`.
    ///
    /// Placement order is greedy on score, not input order: each iteration
    /// scores every remaining rect against the whole free list and places the
    /// globally best pair.
    pub fn pack(&mut self, mut rects: Vec<RectNode>, heuristic: Heuristic) -> Result<PackResult> {
        for r in &rects {
            if r.rect.w == 0 || r.rect.h == 0 {
                return Err(PackError::InvalidInput(format!(
                    "rect #{} has a zero dimension ({}x{})",
                    r.index, r.rect.w, r.rect.h
                )));
            }
        }

        while !rects.is_empty() {
            let mut best: Option<(usize, Placement)> = None;
            for (i, r) in rects.iter().enumerate() {
                let Some(p) = self.score_rect(&r.rect, heuristic) else {
                    continue;
                };
                if best.as_ref().is_none_or(|(_, b)| p.score < b.score) {
                    best = Some((i, p));
                }
            }

            // Nothing fits anywhere; whatever remains is reported back.
            let Some((i, p)) = best else {
                break;
            };

            self.place(&p.rect);
            self.used.push(RectNode {
                rect: p.rect,
                index: rects[i].index,
                rotated: p.rotated,
            });
            rects.remove(i);
        }

        let mut used_width = 0;
        let mut used_height = 0;
        for node in &self.used {
            used_width = used_width.max(node.rect.right());
            used_height = used_height.max(node.rect.bottom());
        }

        Ok(PackResult {
            placed: self.used.clone(),
            not_placed: rects,
            used_width,
            used_height,
            heuristic,
        })
    }

    /// Ratio of placed surface to the configured bin surface (not the tight
    /// bounding box). Placed sizes include padding.
    pub fn occupancy(&self) -> f64 {
        let used: u64 = self.used.iter().map(|n| n.rect.area()).sum();
        used as f64 / (self.config.width as u64 * self.config.height as u64) as f64
    }

    /// Number of free rects currently tracked.
    pub fn free_list_len(&self) -> usize {
        self.free.len()
    }

    /// Scores `rect` (padding inflated, both orientations when rotation is
    /// on) against every free rect and returns the best placement, or `None`
    /// when no free rect can hold it.
    fn score_rect(&self, rect: &Rect, heuristic: Heuristic) -> Option<Placement> {
        let w = rect.w + self.config.padding_x;
        let h = rect.h + self.config.padding_y;
        let rw = rect.h + self.config.padding_x;
        let rh = rect.w + self.config.padding_y;

        let mut best: Option<Placement> = None;
        for fr in &self.free {
            if fr.w >= w && fr.h >= h {
                let score = score_for(heuristic, fr, w, h);
                if best.is_none_or(|b| score < b.score) {
                    best = Some(Placement {
                        rect: Rect::new(fr.x, fr.y, w, h),
                        rotated: false,
                        score,
                    });
                }
            }
            if self.config.allow_rotation && fr.w >= rw && fr.h >= rh {
                let score = score_for(heuristic, fr, rw, rh);
                if best.is_none_or(|b| score < b.score) {
                    best = Some(Placement {
                        rect: Rect::new(fr.x, fr.y, rw, rh),
                        rotated: true,
                        score,
                    });
                }
            }
        }
        best
    }

    /// Subtracts `node` from the free list: intersected entries are replaced
    /// by their split leftovers, then dominated entries are pruned.
    fn place(&mut self, node: &Rect) {
        let mut next: Vec<Rect> = Vec::with_capacity(self.free.len() + 4);
        for fr in &self.free {
            match split_free_rect(fr, node) {
                Some(parts) => next.extend(parts),
                None => next.push(*fr),
            }
        }
        self.free = next;
        prune_free_list(&mut self.free);
    }
}

/// Heuristic scores for placing a `w`x`h` candidate into `free`, which must
/// be large enough to hold it. Lower is better in both components.
fn score_for(heuristic: Heuristic, free: &Rect, w: u32, h: u32) -> (i64, i64) {
    let leftover_w = (free.w - w) as i64;
    let leftover_h = (free.h - h) as i64;
    let short_side = leftover_w.min(leftover_h);
    let long_side = leftover_w.max(leftover_h);
    match heuristic {
        Heuristic::BestShortSideFit => (short_side, long_side),
        Heuristic::BestAreaFit => {
            let area_fit = free.area() as i64 - (w as u64 * h as u64) as i64;
            (area_fit, short_side)
        }
        Heuristic::BottomLeft => ((free.y + h) as i64, free.x as i64),
    }
}

/// Splits `free` around `placed`.
///
/// Returns `None` when the open interiors do not overlap (the free rect is
/// left untouched). Otherwise the up-to-four leftover regions that replace
/// it: full-width strips above and below the placed rect, plus side strips
/// clipped to the vertical overlap. Children with zero area are omitted;
/// a placed rect covering the free rect exactly on one axis simply yields
/// fewer children.
pub fn split_free_rect(free: &Rect, placed: &Rect) -> Option<Vec<Rect>> {
    if !free.intersects(placed) {
        return None;
    }

    let ix1 = free.x.max(placed.x);
    let iy1 = free.y.max(placed.y);
    let ix2 = free.right().min(placed.right());
    let iy2 = free.bottom().min(placed.bottom());

    let mut parts = Vec::with_capacity(4);
    // above
    if iy1 > free.y {
        parts.push(Rect::new(free.x, free.y, free.w, iy1 - free.y));
    }
    // below
    if iy2 < free.bottom() {
        parts.push(Rect::new(free.x, iy2, free.w, free.bottom() - iy2));
    }
    // left
    if ix1 > free.x {
        parts.push(Rect::new(free.x, iy1, ix1 - free.x, iy2 - iy1));
    }
    // right
    if ix2 < free.right() {
        parts.push(Rect::new(ix2, iy1, free.right() - ix2, iy2 - iy1));
    }
    Some(parts)
}

/// Removes every free rect fully contained in another remaining entry, in
/// either direction. Idempotent: a second pass over a pruned list changes
/// nothing.
pub fn prune_free_list(free: &mut Vec<Rect>) {
    let mut i = 0;
    while i < free.len() {
        let mut removed_i = false;
        let mut j = i + 1;
        while j < free.len() {
            if free[i].is_contained_in(&free[j]) {
                free.remove(i);
                removed_i = true;
                break;
            }
            if free[j].is_contained_in(&free[i]) {
                free.remove(j);
            } else {
                j += 1;
            }
        }
        if !removed_i {
            i += 1;
        }
    }
}
