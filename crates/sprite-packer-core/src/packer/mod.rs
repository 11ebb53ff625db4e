pub mod maxrects;

pub use maxrects::{MaxRectsPacker, prune_free_list, split_free_rect};
