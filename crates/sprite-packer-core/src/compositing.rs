use crate::config::SearchConfig;
use crate::error::Result;
use crate::search::{AtlasLayout, find_best_layout};
use image::RgbaImage;

/// Packs `images` and composites them into a single atlas bitmap.
///
/// Runs the search driver over the image dimensions, then blits each placed
/// image at its node position, rotated 90° clockwise where the layout says
/// so. The canvas covers the used extents, not the full bin; padding space
/// inside each node stays transparent.
pub fn build_atlas(images: &[RgbaImage], cfg: &SearchConfig) -> Result<(RgbaImage, AtlasLayout)> {
    let sizes: Vec<(u32, u32)> = images.iter().map(|img| img.dimensions()).collect();
    let layout = find_best_layout(&sizes, cfg)?;

    let mut canvas = RgbaImage::new(layout.result.used_width, layout.result.used_height);
    for node in &layout.result.placed {
        blit_rgba(
            &images[node.index],
            &mut canvas,
            node.rect.x,
            node.rect.y,
            node.rotated,
        );
    }
    Ok((canvas, layout))
}

/// Blit `src` into `canvas` at destination (dx, dy), optionally rotated 90°
/// clockwise. Pixels falling outside the canvas are dropped.
pub fn blit_rgba(src: &RgbaImage, canvas: &mut RgbaImage, dx: u32, dy: u32, rotated: bool) {
    let (sw, sh) = src.dimensions();
    let (cw, ch) = canvas.dimensions();
    // rendered size differs when rotated
    let (rw, rh) = if rotated { (sh, sw) } else { (sw, sh) };

    for yy in 0..rh {
        for xx in 0..rw {
            let (ix, iy) = if rotated { (yy, sh - 1 - xx) } else { (xx, yy) };
            if dx + xx < cw && dy + yy < ch {
                canvas.put_pixel(dx + xx, dy + yy, *src.get_pixel(ix, iy));
            }
        }
    }
}
