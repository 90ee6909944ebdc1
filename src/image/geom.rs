// src/geom.rs

//! Geometric primitives for raster coordinates and component extents.

/// A `(row, col)` position in a raster's index space.
///
/// Rows grow downwards from the top edge, columns grow to the right.
/// This struct is `Copy`, so it can be passed around cheaply by value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: u32,
    pub col: u32,
}

impl Coordinate {
    pub fn new(row: u32, col: u32) -> Self {
        Coordinate { row, col }
    }

    /// Row-major buffer index of this coordinate in a raster `width` pixels wide.
    #[inline]
    pub fn index(&self, width: u32) -> usize {
        index(self.row, self.col, width)
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((row, col): (u32, u32)) -> Self {
        Coordinate { row, col }
    }
}

/// Row-major buffer index: `row * width + col`.
#[inline]
pub fn index(row: u32, col: u32, width: u32) -> usize {
    row as usize * width as usize + col as usize
}

/// Inclusive axis-aligned extent of a set of coordinates.
///
/// Unlike the corner trackers on a region, every edge here is an
/// independent minimum or maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_row: u32,
    pub min_col: u32,
    pub max_row: u32,
    pub max_col: u32,
}

impl Bounds {
    /// Creates the extent of a single coordinate.
    pub fn at(c: Coordinate) -> Self {
        Bounds {
            min_row: c.row,
            min_col: c.col,
            max_row: c.row,
            max_col: c.col,
        }
    }

    /// Grows the extent to include `c`.
    pub fn include(&mut self, c: Coordinate) {
        self.min_row = self.min_row.min(c.row);
        self.min_col = self.min_col.min(c.col);
        self.max_row = self.max_row.max(c.row);
        self.max_col = self.max_col.max(c.col);
    }

    /// Number of rows covered (inclusive).
    pub fn height(&self) -> u32 {
        self.max_row - self.min_row + 1
    }

    /// Number of columns covered (inclusive).
    pub fn width(&self) -> u32 {
        self.max_col - self.min_col + 1
    }

    /// Checks if a coordinate lies within the extent, edges included.
    pub fn contains(&self, c: Coordinate) -> bool {
        c.row >= self.min_row && c.row <= self.max_row && c.col >= self.min_col && c.col <= self.max_col
    }
}
