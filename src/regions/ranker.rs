//! Ordering of labeled regions for downstream consumers.

use std::cmp::Reverse;

use crate::regions::region::Region;

/// Sorts regions by [`Region::area`], largest first.
///
/// The sort is stable: regions with equal area keep their input order.
/// Region contents are never modified.
pub fn rank_by_area(regions: &mut [Region]) {
    regions.sort_by_key(|r| Reverse(r.area()));
}

/// Owned variant of [`rank_by_area`].
pub fn ranked_by_area(mut regions: Vec<Region>) -> Vec<Region> {
    rank_by_area(&mut regions);
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::geom::Coordinate;

    /// A region whose ranking corners span `rows` x `cols`, seeded at `origin`.
    fn spanning(origin: (u32, u32), rows: u32, cols: u32) -> Region {
        let seed = Coordinate::new(origin.0, origin.1);
        let mut region = Region::seeded(seed);
        region.absorb(seed);
        region.absorb(Coordinate::new(origin.0 + rows, origin.1 + cols));
        region
    }

    #[test]
    fn test_descending_by_area() {
        let regions = vec![
            spanning((0, 0), 5, 10),
            spanning((0, 0), 2, 5),
            spanning((0, 0), 3, 10),
        ];
        let areas: Vec<u64> = ranked_by_area(regions).iter().map(Region::area).collect();
        assert_eq!(areas, vec![50, 30, 10]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let first = spanning((0, 0), 2, 3);
        let second = spanning((10, 10), 3, 2);
        let larger = spanning((20, 20), 4, 4);

        let ranked = ranked_by_area(vec![first, second, larger]);
        assert_eq!(ranked, vec![larger, first, second]);
    }

    #[test]
    fn test_contents_unchanged() {
        let mut regions = vec![spanning((1, 1), 1, 1), spanning((0, 0), 2, 2)];
        let before = regions.clone();
        rank_by_area(&mut regions);
        assert_eq!(regions[0], before[1]);
        assert_eq!(regions[1], before[0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(ranked_by_area(Vec::new()).is_empty());
    }
}
