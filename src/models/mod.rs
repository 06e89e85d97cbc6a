//! Core value types for the geofencing engine.

pub mod coordinate;
pub mod region;

pub use coordinate::{BoundingBox, Coordinate, ParseCoordinateError};
pub use region::{ParseRegionError, Region};
