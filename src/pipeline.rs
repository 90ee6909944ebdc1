//! End-to-end analysis: threshold, label, rank.
//!
//! [`RegionFinder`] runs the four stages in sequence for one intensity
//! raster. Each call builds and drops its own summed-area table, binary
//! raster and visited-set, so a finder can be shared between threads and
//! called repeatedly (for example once per slider movement) without any
//! state carrying over between calls.

use log::debug;

use crate::image::image_formats::{BinaryRaster, IntensityRaster};
use crate::regions::labeler::{NeighborBounds, RegionLabeler, TraversalOrder};
use crate::regions::ranker::rank_by_area;
use crate::regions::region::Region;
use crate::threshold::adaptive::{AdaptiveThresholder, DEFAULT_WINDOW_SHIFT};
use crate::threshold::integral::IntegralTable;
use crate::threshold::ratio::Ratio;
use crate::utils::error::Result;

/// Parameters for a full analysis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisParams {
    /// Threshold sensitivity; 1.0 compares against the plain local mean (default: 1.0)
    pub ratio: f64,
    /// Window half-extent is `width >> window_shift` (default: 4)
    pub window_shift: u32,
    /// Candidate filter for neighbor expansion (default: full raster)
    pub neighbor_bounds: NeighborBounds,
    /// Work-list discipline for labeling (default: stack)
    pub traversal_order: TraversalOrder,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            ratio: 1.0,
            window_shift: DEFAULT_WINDOW_SHIFT,
            neighbor_bounds: NeighborBounds::FullRaster,
            traversal_order: TraversalOrder::Stack,
        }
    }
}

impl AnalysisParams {
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Sets the ratio from a whole percentage, e.g. a slider position.
    pub fn with_ratio_percent(mut self, percent: u32) -> Self {
        self.ratio = Ratio::from_percent(percent).value();
        self
    }

    pub fn with_window_shift(mut self, window_shift: u32) -> Self {
        self.window_shift = window_shift;
        self
    }

    pub fn with_neighbor_bounds(mut self, bounds: NeighborBounds) -> Self {
        self.neighbor_bounds = bounds;
        self
    }

    pub fn with_traversal_order(mut self, order: TraversalOrder) -> Self {
        self.traversal_order = order;
        self
    }
}

/// Output of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Thresholded raster; `true` marks ink.
    pub binary: BinaryRaster,
    /// Background regions, largest ranking area first.
    pub regions: Vec<Region>,
}

impl Analysis {
    /// The region with the largest ranking area, if any.
    pub fn largest(&self) -> Option<&Region> {
        self.regions.first()
    }
}

/// Runs adaptive thresholding followed by region labeling and ranking.
#[derive(Debug, Clone, Default)]
pub struct RegionFinder {
    params: AnalysisParams,
}

impl RegionFinder {
    pub fn new(params: AnalysisParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Thresholds `raster` only.
    pub fn threshold(&self, raster: &IntensityRaster) -> Result<BinaryRaster> {
        let ratio = Ratio::new(self.params.ratio)?;
        let table = IntegralTable::from_raster(raster);
        AdaptiveThresholder::new(ratio)
            .with_window_shift(self.params.window_shift)
            .threshold(raster, &table)
    }

    /// Labels and ranks the background regions of an already thresholded raster.
    pub fn regions(&self, binary: &BinaryRaster) -> Vec<Region> {
        let mut regions = RegionLabeler::new()
            .with_neighbor_bounds(self.params.neighbor_bounds)
            .with_traversal_order(self.params.traversal_order)
            .label(binary);
        rank_by_area(&mut regions);
        regions
    }

    /// Runs every stage on `raster`.
    ///
    /// Fails before any work is done if the configured ratio is invalid.
    pub fn analyze(&self, raster: &IntensityRaster) -> Result<Analysis> {
        let binary = self.threshold(raster)?;
        let regions = self.regions(&binary);
        if let Some(top) = regions.first() {
            debug!(
                "{} regions; largest has area {} and {} pixels",
                regions.len(),
                top.area(),
                top.size
            );
        }
        Ok(Analysis { binary, regions })
    }
}

/// Analyzes `raster` with default parameters at the given `ratio`.
pub fn analyze(raster: &IntensityRaster, ratio: f64) -> Result<Analysis> {
    RegionFinder::new(AnalysisParams::default().with_ratio(ratio)).analyze(raster)
}
