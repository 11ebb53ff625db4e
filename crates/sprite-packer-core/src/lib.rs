//! Core library for packing sprites into a texture atlas.
//!
//! - Algorithm: MaxRects over a maximal free-rect list (BSSF / BAF / BL
//!   placement heuristics)
//! - Driver: `find_best_layout` brute-forces candidate widths × heuristics
//!   and keeps the densest configuration that places everything
//! - `build_atlas` composites the placed images into a single RGBA bitmap
//! - Data model is serde-serializable; `export` provides JSON layouts
//!
//! Quick example:
//! ```
//! use sprite_packer_core::prelude::*;
//!
//! let cfg = PackerConfig { width: 256, height: 256, ..Default::default() };
//! let mut packer = MaxRectsPacker::new(cfg)?;
//! let rects = vec![RectNode::new(0, 64, 32), RectNode::new(1, 32, 96)];
//! let result = packer.pack(rects, Heuristic::BestAreaFit)?;
//! assert!(result.not_placed.is_empty());
//! # Ok::<(), sprite_packer_core::PackError>(())
//! ```

pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod search;

pub use compositing::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use search::*;

/// Convenience prelude for the primary APIs.
pub mod prelude {
    pub use crate::compositing::{blit_rgba, build_atlas};
    pub use crate::config::{
        DEFAULT_WIDTHS, Heuristic, PackerConfig, PackerConfigBuilder, SearchConfig,
    };
    pub use crate::error::{PackError, Result};
    pub use crate::export::{to_json, to_json_keyed};
    pub use crate::model::{PackResult, Rect, RectNode};
    pub use crate::packer::{MaxRectsPacker, prune_free_list, split_free_rect};
    pub use crate::search::{AtlasLayout, find_best_layout};
}
