//! Connected background regions of a binary raster.
//!
//! ## Module Map
//!
//! - `region` - Region descriptor with corner trackers and true bounds
//! - `labeler` - 8-connected flood-fill labeling with an explicit work list
//! - `ranker` - Stable descending sort by ranking area

pub mod labeler;
pub mod ranker;
pub mod region;

pub use labeler::{label_regions, NeighborBounds, RegionLabeler, TraversalOrder};
pub use ranker::{rank_by_area, ranked_by_area};
pub use region::Region;
