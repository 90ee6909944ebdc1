//! A Rust library for adaptive binarization and connected-region analysis.
//!
//! This crate turns an 8-bit intensity raster into a binary raster using a
//! local-mean threshold computed from a summed-area table, then groups the
//! background of that binary raster into 8-connected regions ranked by area.
//!
//! # Quick Start
//!
//! ```
//! use adaptive_regions::{AnalysisParams, IntensityRaster, RegionFinder};
//!
//! // A dark page with one bright stroke down the middle
//! let raster = IntensityRaster::from_fn(64, 32, |x, _| if x == 32 { 220 } else { 30 })?;
//!
//! let finder = RegionFinder::new(AnalysisParams::default().with_ratio(1.2));
//! let analysis = finder.analyze(&raster)?;
//!
//! assert!(analysis.binary.get(32, 10));
//! assert_eq!(analysis.binary.count_ink(), 32);
//! for region in &analysis.regions {
//!     println!("{:?} .. {:?}: {} px", region.top_left, region.bottom_right, region.size);
//! }
//! # Ok::<(), adaptive_regions::AnalysisError>(())
//! ```
//!
//! # Pipeline
//!
//! 1. **Integral image** (`threshold::integral`) - summed-area table
//! 2. **Adaptive threshold** (`threshold::adaptive`) - per-pixel local-mean cutoff
//! 3. **Labeling** (`regions::labeler`) - 8-connected flood fill over background
//! 4. **Ranking** (`regions::ranker`) - largest ranking area first
//!
//! # Features
//!
//! - **Exact decisions**: the ratio comparison is done in wide integers, so
//!   floating-point rounding never flips a pixel
//! - **Stateless**: every call owns its intermediate buffers
//! - **Optional parallelism**: enable the `rayon` feature to threshold rows in parallel

// Core modules
pub mod image;
pub mod pipeline;
pub mod regions;
pub mod threshold;
pub mod utils;

// Public pipeline API
pub use pipeline::{analyze, Analysis, AnalysisParams, RegionFinder};

// Raster types
pub use image::{BinaryRaster, Bounds, Coordinate, IntensityRaster};

// Stages (for custom workflows)
pub use regions::{label_regions, rank_by_area, NeighborBounds, Region, RegionLabeler, TraversalOrder};
pub use threshold::{adaptive_threshold, AdaptiveThresholder, IntegralTable, Ratio};

// Error types
pub use utils::error::{AnalysisError, Result};
