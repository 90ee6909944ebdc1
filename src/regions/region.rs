// src/regions/region.rs

use crate::image::geom::{Bounds, Coordinate};

/// Descriptor for a single connected background component.
///
/// The four corners start at the seed pixel and are updated independently
/// as the traversal visits pixels:
///
/// | corner         | replaced when                       |
/// |----------------|-------------------------------------|
/// | `top_left`     | `row <= cur.row && col <= cur.col`  |
/// | `top_right`    | `row >= cur.row && col <= cur.col`  |
/// | `bottom_left`  | `row <= cur.row && col >= cur.col`  |
/// | `bottom_right` | `row >= cur.row && col >= cur.col`  |
///
/// Each rule needs both coordinates to move together, so the corners are
/// not in general the corners of the minimal enclosing rectangle; that
/// rectangle is kept separately in `bounds`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    pub top_left: Coordinate,
    pub top_right: Coordinate,
    pub bottom_left: Coordinate,
    pub bottom_right: Coordinate,
    /// Number of pixels in the component.
    pub size: usize,
    /// Minimal inclusive rectangle around every visited pixel.
    pub bounds: Bounds,
}

impl Region {
    /// Creates an empty region whose corner trackers all start at `seed`.
    ///
    /// The seed itself is counted once it is passed to [`Region::absorb`].
    pub fn seeded(seed: Coordinate) -> Self {
        Region {
            top_left: seed,
            top_right: seed,
            bottom_left: seed,
            bottom_right: seed,
            size: 0,
            bounds: Bounds::at(seed),
        }
    }

    /// Records a newly visited pixel.
    pub fn absorb(&mut self, c: Coordinate) {
        self.size += 1;

        if c.row <= self.top_left.row && c.col <= self.top_left.col {
            self.top_left = c;
        }
        if c.row >= self.top_right.row && c.col <= self.top_right.col {
            self.top_right = c;
        }
        if c.row <= self.bottom_left.row && c.col >= self.bottom_left.col {
            self.bottom_left = c;
        }
        if c.row >= self.bottom_right.row && c.col >= self.bottom_right.col {
            self.bottom_right = c;
        }

        self.bounds.include(c);
    }

    /// Ranking area spanned by `top_left` and `bottom_right`.
    ///
    /// `top_left` only ever moves up-left and `bottom_right` only down-right
    /// from the seed, so both spans are non-negative. A single-row or
    /// single-column region has zero area.
    pub fn area(&self) -> u64 {
        let rows = (self.bottom_right.row - self.top_left.row) as u64;
        let cols = (self.bottom_right.col - self.top_left.col) as u64;
        rows * cols
    }
}
