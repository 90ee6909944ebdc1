//! Adaptive binarization of intensity rasters.
//!
//! ## Module Map
//!
//! - `integral` - Summed-area table with constant-time rectangle sums
//! - `ratio` - Validated sensitivity ratio with exact comparison
//! - `adaptive` - Local-mean threshold driven by the summed-area table

pub mod adaptive;
pub mod integral;
pub mod ratio;

pub use adaptive::{adaptive_threshold, AdaptiveThresholder, DEFAULT_WINDOW_SHIFT};
pub use integral::IntegralTable;
pub use ratio::Ratio;
