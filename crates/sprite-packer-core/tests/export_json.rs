use sprite_packer_core::config::SearchConfig;
use sprite_packer_core::export::{to_json, to_json_keyed};
use sprite_packer_core::search::find_best_layout;

#[test]
fn json_layout_shape() {
    let layout = find_best_layout(&[(10, 10), (20, 20)], &SearchConfig::default()).unwrap();
    let value = to_json(&layout);

    let frames = value["frames"].as_array().unwrap();
    assert_eq!(frames.len(), 2);
    for frame in frames {
        assert!(frame["index"].is_u64());
        assert!(frame["x"].is_u64() && frame["y"].is_u64());
        assert!(frame["w"].is_u64() && frame["h"].is_u64());
        assert!(frame["rotated"].is_boolean());
    }

    let meta = &value["meta"];
    assert_eq!(meta["binWidth"].as_u64().unwrap(), layout.bin_width as u64);
    assert_eq!(meta["notPlaced"].as_u64().unwrap(), 0);
    assert!(meta["occupancy"].as_f64().unwrap() > 0.0);
    assert!(meta["heuristic"].is_string());
}

#[test]
fn keyed_export_maps_indices_to_names() {
    let layout = find_best_layout(&[(10, 10), (20, 20)], &SearchConfig::default()).unwrap();
    let value = to_json_keyed(&layout, &["a.png", "b.png"]);

    let frames = value["frames"].as_array().unwrap();
    for frame in frames {
        let index = frame["index"].as_u64().unwrap();
        let expected = if index == 0 { "a.png" } else { "b.png" };
        assert_eq!(frame["key"].as_str().unwrap(), expected);
    }
}
