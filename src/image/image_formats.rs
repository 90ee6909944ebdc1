// src/image_formats.rs

//! In-memory rasters consumed and produced by the analysis pipeline.
//!
//! Two raster kinds are provided:
//!
//! - [`IntensityRaster`]: one 8-bit intensity sample per pixel.
//! - [`BinaryRaster`]: one bit per pixel, `true` marking foreground ("ink").
//!
//! Both store their samples in row-major order and check at construction
//! that the buffer holds exactly `width * height` samples. Adapters to and
//! from 4-channel interleaved buffers are provided for callers that hold
//! canvas-style RGBA data.

use crate::image::geom::{index, Coordinate};
use crate::utils::error::{sample_count, AnalysisError, Result};
use bitvec::prelude::*;

/// Packed RGBA word written for foreground pixels.
pub const INK_RGBA: u32 = 0xFFFF_FFFF;
/// Packed RGBA word written for background pixels.
pub const BACKGROUND_RGBA: u32 = 0xFF00_0000;

const RGBA_CHANNELS: usize = 4;

// --- IntensityRaster ---

/// A single-channel 8-bit raster stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl IntensityRaster {
    /// Creates a raster from a row-major intensity buffer.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = sample_count(width, height)?;
        if data.len() != expected {
            return Err(AnalysisError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(IntensityRaster {
            width,
            height,
            data,
        })
    }

    /// Creates a raster filled with a single intensity.
    pub fn from_value(width: u32, height: u32, value: u8) -> Result<Self> {
        let len = sample_count(width, height)?;
        Ok(IntensityRaster {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Creates a raster by calling a function for each `(x, y)` pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> u8,
    {
        let mut data = Vec::with_capacity(sample_count(width, height)?);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(IntensityRaster {
            width,
            height,
            data,
        })
    }

    /// Extracts the intensity channel from a 4-channel interleaved buffer.
    ///
    /// The first byte of every pixel is taken as its intensity; the other
    /// three channels are ignored.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let expected = sample_count(width, height)?
            .checked_mul(RGBA_CHANNELS)
            .ok_or(AnalysisError::TooLarge { width, height })?;
        if rgba.len() != expected {
            return Err(AnalysisError::BufferLength {
                expected,
                actual: rgba.len(),
            });
        }
        let data = rgba.chunks_exact(RGBA_CHANNELS).map(|px| px[0]).collect();
        Ok(IntensityRaster {
            width,
            height,
            data,
        })
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
        self.data.is_empty()
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height);
        self.data[index(y, x, self.width)]
    }

    /// Returns one row of samples.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = index(y, 0, self.width);
        &self.data[start..start + self.width as usize]
    }

    /// Returns the raw sample buffer.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

// --- BinaryRaster ---

/// A bilevel raster with one bit per pixel, stored in row-major order.
///
/// `true` marks a foreground ("ink") pixel, `false` a background pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryRaster {
    width: u32,
    height: u32,
    bits: BitVec,
}

impl BinaryRaster {
    /// Creates an all-background raster.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = sample_count(width, height)?;
        Ok(BinaryRaster {
            width,
            height,
            bits: bitvec![0; len],
        })
    }

    /// Creates a raster from a row-major slice of ink flags.
    pub fn from_bools(width: u32, height: u32, ink: &[bool]) -> Result<Self> {
        let expected = sample_count(width, height)?;
        if ink.len() != expected {
            return Err(AnalysisError::BufferLength {
                expected,
                actual: ink.len(),
            });
        }
        Ok(BinaryRaster {
            width,
            height,
            bits: ink.iter().copied().collect(),
        })
    }

    /// Reads a thresholded 4-channel buffer back into a bilevel raster.
    ///
    /// A pixel is ink when its first channel is 255.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let expected = sample_count(width, height)?
            .checked_mul(RGBA_CHANNELS)
            .ok_or(AnalysisError::TooLarge { width, height })?;
        if rgba.len() != expected {
            return Err(AnalysisError::BufferLength {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(BinaryRaster {
            width,
            height,
            bits: rgba.chunks_exact(RGBA_CHANNELS).map(|px| px[0] == 255).collect(),
        })
    }

    pub(crate) fn from_bitvec(width: u32, height: u32, bits: BitVec) -> Self {
        debug_assert_eq!(bits.len(), width as usize * height as usize);
        BinaryRaster {
            width,
            height,
            bits,
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
        self.bits.is_empty()
    }

    /// Returns `true` if the pixel at `(x, y)` is ink.
    pub fn get(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height);
        self.bits[index(y, x, self.width)]
    }

    pub fn set(&mut self, x: u32, y: u32, ink: bool) {
        assert!(x < self.width && y < self.height);
        let i = index(y, x, self.width);
        self.bits.set(i, ink);
    }

    /// Returns `true` if the pixel at `c` is ink.
    #[inline]
    pub fn is_ink(&self, c: Coordinate) -> bool {
        self.bits[c.index(self.width)]
    }

    /// Number of ink pixels.
    pub fn count_ink(&self) -> usize {
        self.bits.count_ones()
    }

    /// Returns the bits as a row-major boolean vector.
    pub fn to_bools(&self) -> Vec<bool> {
        self.bits.iter().by_vals().collect()
    }

    pub fn as_bitslice(&self) -> &BitSlice {
        &self.bits
    }

    /// Renders the raster as packed RGBA words: ink is opaque white,
    /// background is opaque black.
    pub fn to_rgba_words(&self) -> Vec<u32> {
        self.bits
            .iter()
            .by_vals()
            .map(|ink| if ink { INK_RGBA } else { BACKGROUND_RGBA })
            .collect()
    }

    /// Renders the raster as an interleaved RGBA byte buffer.
    ///
    /// Words are laid out little-endian, so background pixels come out as
    /// `[0, 0, 0, 255]` on every target.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let words: Vec<u32> = self.to_rgba_words().into_iter().map(u32::to_le).collect();
        bytemuck::cast_slice::<u32, u8>(&words).to_vec()
    }
}
