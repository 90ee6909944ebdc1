//! Local-mean adaptive thresholding.
//!
//! Every pixel is compared against the mean of a square window centred on
//! it. With `s = width >> window_shift`, the window spans `[x - s, x + s]`
//! by `[y - s, y + s]`, clamped to the raster. A pixel becomes foreground
//! when
//!
//! ```text
//! value * area > window_sum * ratio
//! ```
//!
//! where `area` is the clamped window's pixel count. Near the edges the
//! window shrinks, so `area` is recomputed for every pixel.

use bitvec::prelude::*;
use log::debug;

use crate::image::image_formats::{BinaryRaster, IntensityRaster};
use crate::threshold::integral::IntegralTable;
use crate::threshold::ratio::Ratio;
use crate::utils::error::{AnalysisError, Result};

/// Default `window_shift`: the half-extent is a sixteenth of the width.
pub const DEFAULT_WINDOW_SHIFT: u32 = 4;

/// Converts intensity rasters into binary rasters with a per-pixel cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveThresholder {
    ratio: Ratio,
    window_shift: u32,
}

impl AdaptiveThresholder {
    pub fn new(ratio: Ratio) -> Self {
        AdaptiveThresholder {
            ratio,
            window_shift: DEFAULT_WINDOW_SHIFT,
        }
    }

    /// Sets how far the width is shifted right to get the window half-extent.
    pub fn with_window_shift(mut self, window_shift: u32) -> Self {
        self.window_shift = window_shift;
        self
    }

    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Window half-extent for a raster `width` pixels wide.
    pub fn half_extent(&self, width: u32) -> u32 {
        width.checked_shr(self.window_shift).unwrap_or(0)
    }

    /// Thresholds `raster` using its precomputed summed-area table.
    ///
    /// Fails with `DimensionMismatch` if `table` was not built from a raster
    /// of the same size.
    pub fn threshold(&self, raster: &IntensityRaster, table: &IntegralTable) -> Result<BinaryRaster> {
        if raster.dimensions() != table.dimensions() {
            return Err(AnalysisError::DimensionMismatch {
                expected: raster.dimensions(),
                actual: table.dimensions(),
            });
        }

        let (width, height) = raster.dimensions();
        let s = self.half_extent(width);
        debug!(
            "thresholding {}x{} raster: half-extent {}, ratio {}",
            width,
            height,
            s,
            self.ratio.value()
        );

        #[cfg(feature = "rayon")]
        let bits = {
            use rayon::prelude::*;
            let rows: Vec<BitVec> = (0..height)
                .into_par_iter()
                .map(|y| {
                    let mut row = BitVec::with_capacity(width as usize);
                    self.threshold_row(raster, table, y, s, &mut row);
                    row
                })
                .collect();
            let mut bits = BitVec::with_capacity(raster.as_raw().len());
            for row in &rows {
                bits.extend_from_bitslice(row);
            }
            bits
        };

        #[cfg(not(feature = "rayon"))]
        let bits = {
            let mut bits = BitVec::with_capacity(raster.as_raw().len());
            for y in 0..height {
                self.threshold_row(raster, table, y, s, &mut bits);
            }
            bits
        };

        let binary = BinaryRaster::from_bitvec(width, height, bits);
        debug!("thresholding marked {} foreground pixels", binary.count_ink());
        Ok(binary)
    }

    /// Appends the decisions for row `y` to `out`.
    fn threshold_row(
        &self,
        raster: &IntensityRaster,
        table: &IntegralTable,
        y: u32,
        s: u32,
        out: &mut BitVec,
    ) {
        let (width, height) = raster.dimensions();
        let y1 = y.saturating_sub(s);
        let y2 = y.saturating_add(s).min(height - 1);
        let rows = (y2 - y1 + 1) as u64;

        for (x, &value) in raster.row(y).iter().enumerate() {
            let x = x as u32;
            let x1 = x.saturating_sub(s);
            let x2 = x.saturating_add(s).min(width - 1);
            let area = (x2 - x1 + 1) as u64 * rows;
            // Sums of non-negative intensities are never negative.
            let window_sum = table.local_sum(x1, y1, x2, y2) as u64;
            out.push(self.ratio.is_exceeded_by(value as u64 * area, window_sum));
        }
    }
}

impl Default for AdaptiveThresholder {
    fn default() -> Self {
        AdaptiveThresholder::new(Ratio::default())
    }
}

/// Builds the summed-area table for `raster` and thresholds it at `ratio`.
pub fn adaptive_threshold(raster: &IntensityRaster, ratio: f64) -> Result<BinaryRaster> {
    let ratio = Ratio::new(ratio)?;
    let table = IntegralTable::from_raster(raster);
    AdaptiveThresholder::new(ratio).threshold(raster, &table)
}
