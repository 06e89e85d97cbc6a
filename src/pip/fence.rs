//! Named geofences: built-in regions or user-supplied shapes.

use serde::Serialize;

use super::RegionShape;
use crate::models::{BoundingBox, Coordinate, Region};

/// Owned counterpart of [`RegionShape`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FenceShape {
    Rectangles(Vec<BoundingBox>),
    Polygon(Vec<Coordinate>),
}

impl FenceShape {
    pub fn as_shape(&self) -> RegionShape<'_> {
        match self {
            FenceShape::Rectangles(boxes) => RegionShape::Rectangles(boxes),
            FenceShape::Polygon(ring) => RegionShape::Polygon(ring),
        }
    }
}

impl From<RegionShape<'_>> for FenceShape {
    fn from(shape: RegionShape<'_>) -> Self {
        match shape {
            RegionShape::Rectangles(boxes) => FenceShape::Rectangles(boxes.to_vec()),
            RegionShape::Polygon(ring) => FenceShape::Polygon(ring.to_vec()),
        }
    }
}

/// A named shape tested by the lookup service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geofence {
    pub name: String,

    /// Set when the fence is one of the bundled regions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,

    pub shape: FenceShape,
}

impl Geofence {
    pub fn new(name: impl Into<String>, shape: FenceShape) -> Self {
        Self {
            name: name.into(),
            region: None,
            shape,
        }
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        self.shape.as_shape().contains(point)
    }

    /// Bounding box as `(min_lon, min_lat, max_lon, max_lat)`
    pub fn bbox(&self) -> Option<(f64, f64, f64, f64)> {
        self.shape
            .as_shape()
            .envelope()
            .map(|rect| (rect.min().x, rect.min().y, rect.max().x, rect.max().y))
    }
}

impl From<Region> for Geofence {
    fn from(region: Region) -> Self {
        Self {
            name: region.slug().to_string(),
            region: Some(region),
            shape: region.shape().into(),
        }
    }
}
