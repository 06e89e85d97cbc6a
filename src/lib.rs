//! Regionfence - WGS-84 geofencing predicates
//!
//! Tells whether a coordinate lies in Taiwan, Hong Kong or Macao, using a
//! rectangle test for Taiwan and even-odd ray casting against published
//! boundary polygons for the two SARs. Custom fences can be loaded from TOML
//! and looked up alongside the bundled regions.

pub mod config;
pub mod models;
pub mod pip;

pub use models::{BoundingBox, Coordinate, Region};
pub use pip::{is_in_hong_kong, is_in_macao, is_in_taiwan};
