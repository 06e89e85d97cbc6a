//! Region shapes and the single classification entry point.

use geo::{BoundingRect, Coord, LineString, Rect};

use super::{bbox, dataset, ray_cast};
use crate::models::{BoundingBox, Coordinate, Region};

/// Geometry backing a region: a union of boxes or one closed ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionShape<'a> {
    Rectangles(&'a [BoundingBox]),
    Polygon(&'a [Coordinate]),
}

impl<'a> RegionShape<'a> {
    /// Classify a point. Boundaries are exclusive for both shape kinds.
    pub fn contains(&self, point: Coordinate) -> bool {
        match self {
            RegionShape::Rectangles(boxes) => bbox::contains_any(point, boxes),
            RegionShape::Polygon(ring) => ray_cast::contains(point, ring),
        }
    }

    /// Axis-aligned extent in geo's (lon, lat) order, `None` for an empty shape
    pub fn envelope(&self) -> Option<Rect<f64>> {
        let coords: Vec<Coord<f64>> = match self {
            RegionShape::Rectangles(boxes) => boxes
                .iter()
                .flat_map(|b| b.corners())
                .map(Coord::from)
                .collect(),
            RegionShape::Polygon(ring) => ring.iter().map(|c| Coord::from(*c)).collect(),
        };

        LineString::new(coords).bounding_rect()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RegionShape::Rectangles(boxes) => boxes.is_empty(),
            RegionShape::Polygon(ring) => ring.is_empty(),
        }
    }
}

impl Region {
    /// Bundled geometry for this region
    pub fn shape(&self) -> RegionShape<'static> {
        match self {
            Region::Taiwan => RegionShape::Rectangles(dataset::TAIWAN),
            Region::HongKong => RegionShape::Polygon(dataset::HONG_KONG),
            Region::Macao => RegionShape::Polygon(dataset::MACAO),
        }
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        self.shape().contains(point)
    }
}
