use crate::config::Heuristic;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    pub fn left(&self) -> u32 {
        self.x
    }
    pub fn top(&self) -> u32 {
        self.y
    }
    /// One past the right edge (`x + w`).
    pub fn right(&self) -> u32 {
        self.x + self.w
    }
    /// One past the bottom edge (`y + h`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }
    pub fn center_x(&self) -> u32 {
        self.x + self.w / 2
    }
    pub fn center_y(&self) -> u32 {
        self.y + self.h / 2
    }
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
    /// Returns true if the open interiors overlap. Rects that only touch
    /// along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x >= other.right()
            || other.x >= self.right()
            || self.y >= other.bottom()
            || other.y >= self.bottom())
    }
    /// Returns true if `self` lies fully inside `other` (inclusive edges).
    pub fn is_contained_in(&self, other: &Rect) -> bool {
        self.x >= other.x
            && self.y >= other.y
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
    }
    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }
}

/// A rectangle request tagged with the input slot it came from.
///
/// Created by the caller as a size-only request; the packer fills in the
/// final position, swaps `w`/`h` when `rotated` is set, and inflates the
/// stored size by the per-axis padding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RectNode {
    pub rect: Rect,
    pub index: usize,
    pub rotated: bool,
}

impl RectNode {
    /// A pending request: size only, position assigned by the packer.
    pub fn new(index: usize, w: u32, h: u32) -> Self {
        Self {
            rect: Rect::new(0, 0, w, h),
            index,
            rotated: false,
        }
    }
}

/// Outcome of one packing run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackResult {
    /// Rects that were placed, with final position, padded size and rotation.
    pub placed: Vec<RectNode>,
    /// Rects that did not fit in the bin, unchanged.
    pub not_placed: Vec<RectNode>,
    /// Tight bounding-box width of the placed rects, not the bin width.
    pub used_width: u32,
    /// Tight bounding-box height of the placed rects, not the bin height.
    pub used_height: u32,
    /// Heuristic this run was scored with.
    pub heuristic: Heuristic,
}
