//! Raster containers and raster geometry.

pub mod geom;
pub mod image_formats;

pub use geom::{index, Bounds, Coordinate};
pub use image_formats::{BinaryRaster, IntensityRaster, BACKGROUND_RGBA, INK_RGBA};
