use crate::error::{PackError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Free-rect choice heuristics for MaxRects placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// BSSF: positions the rect against the short side of the free rect into
    /// which it fits the best.
    BestShortSideFit,
    /// BAF: positions the rect into the smallest free rect into which it fits.
    BestAreaFit,
    /// BL: the Tetris placement.
    BottomLeft,
}

impl Heuristic {
    /// Every heuristic, in the order the search driver tries them.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::BestShortSideFit,
        Heuristic::BestAreaFit,
        Heuristic::BottomLeft,
    ];
}

impl FromStr for Heuristic {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bssf" | "bestshortsidefit" => Ok(Self::BestShortSideFit),
            "baf" | "bestareafit" => Ok(Self::BestAreaFit),
            "bl" | "bottomleft" => Ok(Self::BottomLeft),
            _ => Err(()),
        }
    }
}

/// Bin configuration, fixed for the lifetime of one packer instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackerConfig {
    /// Bin width in pixels.
    pub width: u32,
    /// Bin height in pixels.
    pub height: u32,
    /// Pixels reserved to the right of every placed rect.
    pub padding_x: u32,
    /// Pixels reserved below every placed rect.
    pub padding_y: u32,
    /// Allow 90° rotations for placements where beneficial.
    pub allow_rotation: bool,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            padding_x: 0,
            padding_y: 0,
            allow_rotation: true,
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PackError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.padding_x >= self.width || self.padding_y >= self.height {
            return Err(PackError::InvalidConfig(format!(
                "padding {}x{} leaves no usable space in a {}x{} bin",
                self.padding_x, self.padding_y, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn with_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.width = w;
        self.cfg.height = h;
        self
    }
    pub fn padding(mut self, x: u32, y: u32) -> Self {
        self.cfg.padding_x = x;
        self.cfg.padding_y = y;
        self
    }
    pub fn allow_rotation(mut self, v: bool) -> Self {
        self.cfg.allow_rotation = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}

/// Candidate bin widths tried by the search driver when none are configured.
pub const DEFAULT_WIDTHS: [u32; 4] = [128, 256, 512, 1024];

/// Parameters for the brute-force atlas search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Candidate bin widths, tried in order.
    pub widths: Vec<u32>,
    pub padding_x: u32,
    pub padding_y: u32,
    pub allow_rotation: bool,
    /// Increment applied to the surface scale after a failed attempt.
    pub growth_step: f64,
    /// Retry cap: a width/heuristic combo is abandoned once the surface
    /// scale exceeds this.
    pub max_scale: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            widths: DEFAULT_WIDTHS.to_vec(),
            padding_x: 0,
            padding_y: 0,
            allow_rotation: true,
            growth_step: 0.01,
            max_scale: 3.0,
        }
    }
}

impl SearchConfig {
    /// Validates the search parameters.
    pub fn validate(&self) -> Result<()> {
        if self.widths.is_empty() {
            return Err(PackError::InvalidConfig("no candidate widths".into()));
        }
        if self.widths.iter().any(|&w| w == 0) {
            return Err(PackError::InvalidConfig(
                "candidate widths must be positive".into(),
            ));
        }
        if !(self.growth_step > 0.0) {
            return Err(PackError::InvalidConfig(format!(
                "growth_step must be positive, got {}",
                self.growth_step
            )));
        }
        if self.max_scale < 1.0 {
            return Err(PackError::InvalidConfig(format!(
                "max_scale must be at least 1.0, got {}",
                self.max_scale
            )));
        }
        Ok(())
    }
}
