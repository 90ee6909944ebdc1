//! 8-connected labeling of background pixels.
//!
//! The binary raster is treated as an implicit grid graph. Ink pixels are
//! barriers; every maximal 8-connected group of background pixels becomes
//! one [`Region`].
//!
//! ## Algorithm
//!
//! Seeds are scanned in row-major order. Each unvisited background seed
//! starts a new region and is pushed onto an explicit work list. Popping a
//! coordinate that is already visited is a no-op; otherwise it is marked,
//! counted into the region, and every candidate 8-neighbor that is
//! background and unvisited is pushed. A pixel may be pushed several times
//! before it is visited, but is absorbed exactly once, so the total work is
//! O(width * height).
//!
//! ## Coordinate System
//!
//! - `row` 0 is the TOP of the raster, `col` 0 the LEFT edge.
//! - Neighbors are generated row by row from `row - 1` to `row + 1`, and
//!   within a row from `col - 1` to `col + 1`.

use std::collections::VecDeque;

use bitvec::prelude::*;
use log::{debug, trace};

use crate::image::geom::Coordinate;
use crate::image::image_formats::BinaryRaster;
use crate::regions::region::Region;

/// Which neighbor coordinates may be reached by expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborBounds {
    /// Any in-raster coordinate.
    #[default]
    FullRaster,
    /// Only coordinates with `row > 0` and `col > 0`.
    ///
    /// Pixels on row 0 or column 0 can still start a region as seeds, but are
    /// never reached from a neighbor, so an open border breaks up into many
    /// small regions. Use it to reproduce region lists recorded by tools that
    /// filter candidates this way.
    SkipLeadingEdges,
}

impl NeighborBounds {
    fn lowest_index(self) -> i64 {
        match self {
            NeighborBounds::FullRaster => 0,
            NeighborBounds::SkipLeadingEdges => 1,
        }
    }
}

/// Work-list discipline used during traversal.
///
/// The order never changes which pixels end up in a region. It can change
/// which of several tied pixels a corner tracker records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Last in, first out.
    #[default]
    Stack,
    /// First in, first out.
    Queue,
}

enum WorkList {
    Stack(Vec<Coordinate>),
    Queue(VecDeque<Coordinate>),
}

impl WorkList {
    fn new(order: TraversalOrder) -> Self {
        match order {
            TraversalOrder::Stack => WorkList::Stack(Vec::new()),
            TraversalOrder::Queue => WorkList::Queue(VecDeque::new()),
        }
    }

    fn push(&mut self, c: Coordinate) {
        match self {
            WorkList::Stack(v) => v.push(c),
            WorkList::Queue(q) => q.push_back(c),
        }
    }

    fn pop(&mut self) -> Option<Coordinate> {
        match self {
            WorkList::Stack(v) => v.pop(),
            WorkList::Queue(q) => q.pop_front(),
        }
    }
}

/// Partitions the background of a binary raster into 8-connected regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionLabeler {
    bounds: NeighborBounds,
    order: TraversalOrder,
}

impl RegionLabeler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_neighbor_bounds(mut self, bounds: NeighborBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_traversal_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    pub fn neighbor_bounds(&self) -> NeighborBounds {
        self.bounds
    }

    pub fn traversal_order(&self) -> TraversalOrder {
        self.order
    }

    /// Returns one region per connected background component, in the order
    /// their seeds were found (row-major).
    pub fn label(&self, binary: &BinaryRaster) -> Vec<Region> {
        let (width, height) = binary.dimensions();
        let mut visited: BitVec = bitvec![0; binary.as_bitslice().len()];
        let mut work = WorkList::new(self.order);
        let mut regions = Vec::new();

        for row in 0..height {
            for col in 0..width {
                let seed = Coordinate::new(row, col);
                let i = seed.index(width);
                if binary.is_ink(seed) || visited[i] {
                    continue;
                }

                let mut region = Region::seeded(seed);
                work.push(seed);
                while let Some(c) = work.pop() {
                    let ci = c.index(width);
                    if visited[ci] {
                        continue;
                    }
                    visited.set(ci, true);
                    region.absorb(c);
                    self.push_neighbors(binary, &visited, c, &mut work);
                }

                trace!(
                    "region {}: seed ({}, {}), size {}, area {}",
                    regions.len(),
                    seed.row,
                    seed.col,
                    region.size,
                    region.area()
                );
                regions.push(region);
            }
        }

        debug!("labeled {} regions in {}x{} raster", regions.len(), width, height);
        regions
    }

    fn push_neighbors(&self, binary: &BinaryRaster, visited: &BitSlice, c: Coordinate, work: &mut WorkList) {
        let (width, height) = binary.dimensions();
        let lowest = self.bounds.lowest_index();
        let (row, col) = (c.row as i64, c.col as i64);

        for r in row - 1..=row + 1 {
            if r < lowest || r >= height as i64 {
                continue;
            }
            for k in col - 1..=col + 1 {
                if k < lowest || k >= width as i64 {
                    continue;
                }
                let n = Coordinate::new(r as u32, k as u32);
                if !binary.is_ink(n) && !visited[n.index(width)] {
                    work.push(n);
                }
            }
        }
    }
}

/// Labels `binary` with the default labeler: full-raster neighbors, stack order.
pub fn label_regions(binary: &BinaryRaster) -> Vec<Region> {
    RegionLabeler::default().label(binary)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a raster from rows where `#` is ink and `.` is background.
    fn raster(rows: &[&str]) -> BinaryRaster {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let ink: Vec<bool> = rows.iter().flat_map(|r| r.chars().map(|ch| ch == '#')).collect();
        BinaryRaster::from_bools(width, height, &ink).unwrap()
    }

    fn sizes(regions: &[Region]) -> Vec<usize> {
        regions.iter().map(|r| r.size).collect()
    }

    #[test]
    fn test_all_background_is_one_region() {
        let binary = BinaryRaster::new(7, 5).unwrap();
        let regions = label_regions(&binary);
        assert_eq!(sizes(&regions), vec![35]);
        assert_eq!(regions[0].top_left, Coordinate::new(0, 0));
        assert_eq!(regions[0].bottom_right, Coordinate::new(4, 6));
    }

    #[test]
    fn test_all_ink_has_no_regions() {
        let binary = raster(&["###", "###"]);
        assert!(label_regions(&binary).is_empty());
    }

    #[test]
    fn test_empty_raster_has_no_regions() {
        let binary = BinaryRaster::new(0, 3).unwrap();
        assert!(label_regions(&binary).is_empty());
    }

    #[test]
    fn test_diagonal_neighbors_connect() {
        let binary = raster(&[
            ".##", //
            "#.#", //
            "##.",
        ]);
        let regions = label_regions(&binary);
        assert_eq!(sizes(&regions), vec![3]);
        assert_eq!(regions[0].top_left, Coordinate::new(0, 0));
        assert_eq!(regions[0].bottom_right, Coordinate::new(2, 2));
    }

    #[test]
    fn test_ink_row_splits_regions() {
        let binary = raster(&[
            "....", //
            "####", //
            "....", //
            "....",
        ]);
        let regions = label_regions(&binary);
        assert_eq!(sizes(&regions), vec![4, 8]);
        assert_eq!(regions[1].top_left, Coordinate::new(2, 0));
        assert_eq!(regions[1].bottom_right, Coordinate::new(3, 3));
    }

    #[test]
    fn test_single_pixel_barrier_does_not_split() {
        let binary = raster(&[
            "....", //
            "....", //
            "..#.", //
            "....",
        ]);
        let regions = label_regions(&binary);
        assert_eq!(sizes(&regions), vec![15]);
    }

    #[test]
    fn test_enclosed_pocket_is_separate() {
        let binary = raster(&[
            ".....", //
            ".###.", //
            ".#.#.", //
            ".###.", //
            ".....",
        ]);
        let regions = label_regions(&binary);
        assert_eq!(sizes(&regions), vec![16, 1]);
        assert_eq!(regions[1].top_left, Coordinate::new(2, 2));
        assert_eq!(regions[1].bounds.width(), 1);
    }

    #[test]
    fn test_leading_edges_skipped_during_expansion() {
        // With the leading edges skipped, row 0 and column 0 are reachable
        // only as seeds. The first seed (0, 0) jumps to (1, 1) and claims the
        // interior; every other edge pixel is left on its own.
        let binary = BinaryRaster::new(3, 3).unwrap();
        let labeler = RegionLabeler::new().with_neighbor_bounds(NeighborBounds::SkipLeadingEdges);
        let regions = labeler.label(&binary);

        assert_eq!(sizes(&regions), vec![5, 1, 1, 1, 1]);
        let seeds: Vec<Coordinate> = regions[1..].iter().map(|r| r.top_left).collect();
        assert_eq!(
            seeds,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
                Coordinate::new(1, 0),
                Coordinate::new(2, 0),
            ]
        );
        assert_eq!(regions[0].bottom_right, Coordinate::new(2, 2));
    }

    #[test]
    fn test_traversal_order_keeps_partition() {
        let binary = raster(&[
            "..#...", //
            ".#..#.", //
            "#..#..", //
            "...#.#", //
            ".#.#..",
        ]);
        let stack = RegionLabeler::new().label(&binary);
        let queue = RegionLabeler::new()
            .with_traversal_order(TraversalOrder::Queue)
            .label(&binary);

        assert_eq!(sizes(&stack), sizes(&queue));
        let total: usize = sizes(&stack).iter().sum();
        assert_eq!(total, 30 - binary.count_ink());
        for (a, b) in stack.iter().zip(&queue) {
            assert_eq!(a.bounds, b.bounds);
        }
    }

    #[test]
    fn test_corner_positions_for_full_grid() {
        let binary = BinaryRaster::new(4, 4).unwrap();
        for order in [TraversalOrder::Stack, TraversalOrder::Queue] {
            let regions = RegionLabeler::new().with_traversal_order(order).label(&binary);
            assert_eq!(regions.len(), 1);
            let r = regions[0];
            assert_eq!(r.top_left, Coordinate::new(0, 0));
            assert_eq!(r.top_right, Coordinate::new(3, 0));
            assert_eq!(r.bottom_left, Coordinate::new(0, 3));
            assert_eq!(r.bottom_right, Coordinate::new(3, 3));
            assert_eq!(r.area(), 9);
        }
    }
}
