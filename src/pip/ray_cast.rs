//! Even-odd ray casting against a closed ring of coordinates.
//!
//! A horizontal ray is cast from the query point towards increasing longitude
//! and the edges it crosses are counted; an odd count means inside. The ring is
//! implicitly closed (the last vertex connects back to the first), so callers
//! never repeat the first vertex.
//!
//! Points lying exactly on an edge or vertex are outside. That case is decided
//! up front with a robust orientation test instead of being left to the
//! rounding of the crossing interpolation, which keeps the answer independent of
//! winding direction and ring start offset.

use geo::{Coord, Intersects, Line};

use crate::models::Coordinate;

/// Even-odd containment test of `point` against the ring `polygon`.
///
/// Rings with fewer than three vertices enclose nothing and always return
/// false. Non-finite points fall out as false through IEEE comparisons.
pub fn contains(point: Coordinate, polygon: &[Coordinate]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    if point.is_finite() && on_boundary(point, polygon) {
        return false;
    }

    let mut inside = false;

    for (v1, v2) in edges(polygon) {
        // Exactly one endpoint strictly north of the point. Skips horizontal
        // edges and counts a shared vertex once.
        if (v1.latitude > point.latitude) != (v2.latitude > point.latitude) {
            let x_cross = v2.longitude
                + (v1.longitude - v2.longitude) * (point.latitude - v2.latitude)
                    / (v1.latitude - v2.latitude);

            if point.longitude < x_cross {
                inside = !inside;
            }
        }
    }

    inside
}

/// True if `point` lies on any edge (vertices included) of the ring
pub fn on_boundary(point: Coordinate, polygon: &[Coordinate]) -> bool {
    let p: Coord<f64> = point.into();
    edges(polygon).any(|(v1, v2)| Line::new(Coord::from(v1), Coord::from(v2)).intersects(&p))
}

/// Edges `(vertex[i], vertex[i - 1])` of the implicitly closed ring
fn edges(polygon: &[Coordinate]) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
    let previous = polygon.last().copied().into_iter().chain(polygon.iter().copied());
    polygon.iter().copied().zip(previous)
}
