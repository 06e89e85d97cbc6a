//! Rectangle-set containment.

use crate::models::{BoundingBox, Coordinate};

/// True if `point` is strictly inside at least one of `boxes`.
///
/// Points on any bound count as outside (see [`BoundingBox`]). An empty set
/// contains nothing.
pub fn contains_any(point: Coordinate, boxes: &[BoundingBox]) -> bool {
    boxes.iter().any(|b| b.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOXES: [BoundingBox; 2] = [
        BoundingBox::new(0.0, 10.0, 0.0, 10.0),
        BoundingBox::new(0.0, 5.0, -5.0, 10.0),
    ];

    #[test]
    fn test_union_of_boxes() {
        // only in the first box
        assert!(contains_any(Coordinate::new(8.0, 5.0), &BOXES));
        // only in the second box
        assert!(contains_any(Coordinate::new(2.0, -2.0), &BOXES));
        // in both
        assert!(contains_any(Coordinate::new(2.0, 2.0), &BOXES));
        // north of the second box and west of the first
        assert!(!contains_any(Coordinate::new(8.0, -2.0), &BOXES));
    }

    #[test]
    fn test_shared_bound_is_outside() {
        // shared southern bound
        assert!(!contains_any(Coordinate::new(0.0, 5.0), &BOXES));
        // western bound of the first box, inside the second
        assert!(contains_any(Coordinate::new(2.0, 0.0), &BOXES));
        // western bound of the first box, above the second
        assert!(!contains_any(Coordinate::new(8.0, 0.0), &BOXES));
    }

    #[test]
    fn test_empty_set() {
        assert!(!contains_any(Coordinate::new(1.0, 1.0), &[]));
    }
}
