//! Named region predicates.
//!
//! All functions are pure and allocation-free except
//! [`regions_containing`]. Safe to call from any thread.

use crate::models::{Coordinate, Region};

/// Is the WGS-84 `point` in Taiwan (main island or Penghu)?
pub fn is_in_taiwan(point: Coordinate) -> bool {
    Region::Taiwan.contains(point)
}

/// Is the WGS-84 `point` in Hong Kong?
pub fn is_in_hong_kong(point: Coordinate) -> bool {
    Region::HongKong.contains(point)
}

/// Is the WGS-84 `point` in Macao, including its waters?
pub fn is_in_macao(point: Coordinate) -> bool {
    Region::Macao.contains(point)
}

/// Every built-in region containing `point`, in [`Region::all`] order
pub fn regions_containing(point: Coordinate) -> Vec<Region> {
    Region::all()
        .iter()
        .copied()
        .filter(|r| r.contains(point))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_predicates_match_region_dispatch() {
        let points = [
            Coordinate::new(23.7, 121.0),
            Coordinate::new(22.5, 114.1),
            Coordinate::new(22.15, 113.58),
            Coordinate::new(0.0, 0.0),
        ];
        for p in points {
            assert_eq!(is_in_taiwan(p), Region::Taiwan.contains(p));
            assert_eq!(is_in_hong_kong(p), Region::HongKong.contains(p));
            assert_eq!(is_in_macao(p), Region::Macao.contains(p));
        }
    }

    #[test]
    fn test_regions_containing() {
        assert_eq!(
            regions_containing(Coordinate::new(22.5, 114.1)),
            vec![Region::HongKong]
        );
        assert_eq!(
            regions_containing(Coordinate::new(23.7, 121.0)),
            vec![Region::Taiwan]
        );
        assert!(regions_containing(Coordinate::new(0.0, 0.0)).is_empty());
    }
}
