//! Summed-area tables over intensity rasters.
//!
//! `IntegralTable::at(x, y)` holds the sum of every intensity in the
//! rectangle from `(0, 0)` to `(x, y)` inclusive, which lets
//! [`IntegralTable::local_sum`] answer any rectangular sum with at most
//! four table reads.

use crate::image::geom::index;
use crate::image::image_formats::IntensityRaster;

/// A row-major summed-area table with the same dimensions as its source raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegralTable {
    width: u32,
    height: u32,
    sums: Vec<i64>,
}

impl IntegralTable {
    /// Builds the table in a single forward pass.
    ///
    /// The first row is a running prefix sum. Every later entry is the entry
    /// directly above plus the running sum of its own row through that column.
    pub fn from_raster(raster: &IntensityRaster) -> Self {
        let (width, height) = raster.dimensions();
        let w = width as usize;
        let mut sums = vec![0i64; raster.as_raw().len()];

        if w > 0 && height > 0 {
            let mut sum = 0i64;
            for (x, &v) in raster.row(0).iter().enumerate() {
                sum += v as i64;
                sums[x] = sum;
            }

            for y in 1..height {
                let line = index(y, 0, width);
                sum = 0;
                for (x, &v) in raster.row(y).iter().enumerate() {
                    sum += v as i64;
                    sums[line + x] = sums[line - w + x] + sum;
                }
            }
        }

        IntegralTable {
            width,
            height,
            sums,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as a tuple (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// Sum of the rectangle `(0, 0)..=(x, y)`.
    #[inline]
    pub fn at(&self, x: u32, y: u32) -> i64 {
        self.sums[index(y, x, self.width)]
    }

    /// Sum of the inclusive rectangle `(x1, y1)..=(x2, y2)`.
    ///
    /// Rows and columns before the rectangle are only subtracted when they
    /// exist, so rectangles touching row 0 or column 0 never read outside
    /// the table.
    pub fn local_sum(&self, x1: u32, y1: u32, x2: u32, y2: u32) -> i64 {
        debug_assert!(x1 <= x2 && x2 < self.width, "x range {x1}..={x2} out of bounds");
        debug_assert!(y1 <= y2 && y2 < self.height, "y range {y1}..={y2} out of bounds");

        let mut result = self.at(x2, y2);
        if y1 > 0 {
            result -= self.at(x2, y1 - 1);
            if x1 > 0 {
                result += self.at(x1 - 1, y1 - 1);
            }
        }
        if x1 > 0 {
            result -= self.at(x1 - 1, y2);
        }
        result
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.sums
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small deterministic generator so the brute-force checks see varied data.
    fn noise_raster(width: u32, height: u32, seed: u32) -> IntensityRaster {
        let mut state = seed;
        IntensityRaster::from_fn(width, height, |_, _| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .unwrap()
    }

    fn brute_sum(raster: &IntensityRaster, x1: u32, y1: u32, x2: u32, y2: u32) -> i64 {
        let mut total = 0i64;
        for y in y1..=y2 {
            for x in x1..=x2 {
                total += raster.get(x, y) as i64;
            }
        }
        total
    }

    #[test]
    fn test_known_table() {
        let raster = IntensityRaster::new(
            5,
            4,
            vec![
                1, 0, 1, 0, 0, //
                2, 0, 0, 0, 0, //
                3, 0, 1, 0, 0, //
                0, 0, 0, 0, 1,
            ],
        )
        .unwrap();
        let table = IntegralTable::from_raster(&raster);
        assert_eq!(
            table.as_slice(),
            &[
                1, 1, 2, 2, 2, //
                3, 3, 4, 4, 4, //
                6, 6, 8, 8, 8, //
                6, 6, 8, 8, 9,
            ]
        );
        assert_eq!(table.local_sum(0, 0, 1, 1), 3);
        assert_eq!(table.local_sum(2, 2, 4, 3), 2);
    }

    #[test]
    fn test_full_rectangle_is_total() {
        let raster = noise_raster(13, 9, 7);
        let table = IntegralTable::from_raster(&raster);
        let total: i64 = raster.as_raw().iter().map(|&v| v as i64).sum();
        assert_eq!(table.local_sum(0, 0, 12, 8), total);
    }

    #[test]
    fn test_local_sum_matches_brute_force() {
        let raster = noise_raster(7, 6, 42);
        let table = IntegralTable::from_raster(&raster);
        for y1 in 0..6 {
            for y2 in y1..6 {
                for x1 in 0..7 {
                    for x2 in x1..7 {
                        assert_eq!(
                            table.local_sum(x1, y1, x2, y2),
                            brute_sum(&raster, x1, y1, x2, y2),
                            "rect ({x1},{y1})..=({x2},{y2})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_monotonic_along_both_axes() {
        let raster = noise_raster(8, 8, 3);
        let table = IntegralTable::from_raster(&raster);
        for y in 0..8 {
            for x in 0..8 {
                if x > 0 {
                    assert!(table.at(x, y) >= table.at(x - 1, y));
                }
                if y > 0 {
                    assert!(table.at(x, y) >= table.at(x, y - 1));
                }
            }
        }
    }

    #[test]
    fn test_empty_raster_gives_empty_table() {
        let raster = IntensityRaster::new(0, 3, Vec::new()).unwrap();
        let table = IntegralTable::from_raster(&raster);
        assert!(table.is_empty());
        assert_eq!(table.dimensions(), (0, 3));
    }

    #[test]
    fn test_single_row_and_column() {
        let row = IntensityRaster::new(4, 1, vec![5, 6, 7, 8]).unwrap();
        assert_eq!(IntegralTable::from_raster(&row).as_slice(), &[5, 11, 18, 26]);

        let col = IntensityRaster::new(1, 3, vec![1, 2, 3]).unwrap();
        assert_eq!(IntegralTable::from_raster(&col).as_slice(), &[1, 3, 6]);
    }
}
