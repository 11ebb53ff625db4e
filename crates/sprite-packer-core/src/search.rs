use crate::config::{Heuristic, PackerConfig, SearchConfig};
use crate::error::{PackError, Result};
use crate::model::{PackResult, RectNode};
use crate::packer::MaxRectsPacker;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Best layout found by the brute-force search.
#[derive(Debug, Clone)]
pub struct AtlasLayout {
    pub result: PackResult,
    /// Bin dimensions of the winning configuration.
    pub bin_width: u32,
    pub bin_height: u32,
    /// Placed surface over bin surface for the winning configuration.
    pub occupancy: f64,
}

/// Finds a good bin configuration for `sizes` without the caller guessing
/// dimensions.
///
/// Every candidate width is tried with every heuristic; a combo that leaves
/// rects unplaced is retried with a grown surface estimate until it converges
/// or its scale cap is hit. The highest-occupancy fully-placed configuration
/// wins; ties keep the earliest combo, so results are deterministic (also
/// under the `parallel` feature, which only spreads the trials).
#[instrument(skip_all)]
pub fn find_best_layout(sizes: &[(u32, u32)], cfg: &SearchConfig) -> Result<AtlasLayout> {
    cfg.validate()?;
    if sizes.is_empty() {
        return Err(PackError::Empty);
    }
    for (i, &(w, h)) in sizes.iter().enumerate() {
        if w == 0 || h == 0 {
            return Err(PackError::InvalidInput(format!(
                "rect #{i} has a zero dimension ({w}x{h})"
            )));
        }
    }

    let combos: Vec<(u32, Heuristic)> = cfg
        .widths
        .iter()
        .flat_map(|&w| Heuristic::ALL.iter().map(move |&h| (w, h)))
        .collect();

    #[cfg(feature = "parallel")]
    let evaluated: Vec<Option<AtlasLayout>> = combos
        .par_iter()
        .map(|&(width, heuristic)| evaluate_combo(sizes, cfg, width, heuristic))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let evaluated: Vec<Option<AtlasLayout>> = combos
        .iter()
        .map(|&(width, heuristic)| evaluate_combo(sizes, cfg, width, heuristic))
        .collect();

    let mut best: Option<AtlasLayout> = None;
    for layout in evaluated.into_iter().flatten() {
        debug!(
            width = layout.bin_width,
            height = layout.bin_height,
            heuristic = ?layout.result.heuristic,
            occupancy = layout.occupancy,
            "combo placed all rects"
        );
        if best.as_ref().is_none_or(|b| layout.occupancy > b.occupancy) {
            best = Some(layout);
        }
    }
    best.ok_or(PackError::SearchExhausted {
        combos: combos.len(),
        max_scale: cfg.max_scale,
    })
}

/// Runs one width/heuristic combo to convergence or its scale cap.
fn evaluate_combo(
    sizes: &[(u32, u32)],
    cfg: &SearchConfig,
    width: u32,
    heuristic: Heuristic,
) -> Option<AtlasLayout> {
    // The bin height is derived from the scaled surface estimate, floored at
    // the tallest candidate so the retry loop stays short when the inputs are
    // much smaller than the bin width.
    let mut min_height = 0u32;
    for &(w, h) in sizes {
        let mut need = u32::MAX;
        if w.saturating_add(cfg.padding_x) <= width {
            need = need.min(h);
        }
        if cfg.allow_rotation && h.saturating_add(cfg.padding_x) <= width {
            need = need.min(w);
        }
        if need == u32::MAX {
            // This width cannot admit the rect in any orientation; no amount
            // of extra height will change that.
            return None;
        }
        min_height = min_height.max(need);
    }
    let min_height = min_height + cfg.padding_y;

    let total_area: u64 = sizes.iter().map(|&(w, h)| w as u64 * h as u64).sum();

    let mut scale = 1.0f64;
    while scale <= cfg.max_scale {
        let surface = (total_area as f64 * scale) as u64;
        let height = ((surface / width as u64) as u32).max(min_height);
        let bin = PackerConfig {
            width,
            height,
            padding_x: cfg.padding_x,
            padding_y: cfg.padding_y,
            allow_rotation: cfg.allow_rotation,
        };
        let rects: Vec<RectNode> = sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| RectNode::new(i, w, h))
            .collect();

        let mut packer = MaxRectsPacker::new(bin).ok()?;
        let result = packer.pack(rects, heuristic).ok()?;
        if result.not_placed.is_empty() {
            let occupancy = packer.occupancy();
            return Some(AtlasLayout {
                result,
                bin_width: width,
                bin_height: height,
                occupancy,
            });
        }

        // Some rects did not fit in the derived area; grow it a bit.
        scale += cfg.growth_step;
    }
    None
}
