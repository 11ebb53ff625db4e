use crate::search::AtlasLayout;
use serde_json::{Value, json};

/// Serialize a layout as `{ frames, meta }`, frames identified by input
/// index. Positions and sizes are the placed (padded) node rects.
pub fn to_json(layout: &AtlasLayout) -> Value {
    let frames: Vec<Value> = layout
        .result
        .placed
        .iter()
        .map(|n| {
            json!({
                "index": n.index,
                "x": n.rect.x,
                "y": n.rect.y,
                "w": n.rect.w,
                "h": n.rect.h,
                "rotated": n.rotated,
            })
        })
        .collect();
    json!({ "frames": frames, "meta": meta_value(layout) })
}

/// Same as [`to_json`], with each frame carrying a caller-supplied key (e.g.
/// the source file name) looked up by input index.
pub fn to_json_keyed<K: ToString>(layout: &AtlasLayout, keys: &[K]) -> Value {
    let frames: Vec<Value> = layout
        .result
        .placed
        .iter()
        .map(|n| {
            let key = keys.get(n.index).map(|k| k.to_string()).unwrap_or_default();
            json!({
                "key": key,
                "index": n.index,
                "x": n.rect.x,
                "y": n.rect.y,
                "w": n.rect.w,
                "h": n.rect.h,
                "rotated": n.rotated,
            })
        })
        .collect();
    json!({ "frames": frames, "meta": meta_value(layout) })
}

fn meta_value(layout: &AtlasLayout) -> Value {
    json!({
        "binWidth": layout.bin_width,
        "binHeight": layout.bin_height,
        "usedWidth": layout.result.used_width,
        "usedHeight": layout.result.used_height,
        "occupancy": layout.occupancy,
        "heuristic": layout.result.heuristic,
        "notPlaced": layout.result.not_placed.len(),
    })
}
