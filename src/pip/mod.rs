//! Point-in-region containment engine.
//!
//! Rectangle-set and ray-casting tests, the bundled region data, and a small
//! R-tree backed lookup over named geofences.

mod bbox;
mod classifier;
mod dataset;
mod fence;
mod index;
mod ray_cast;
mod service;
mod shape;

pub use bbox::contains_any;
pub use classifier::{is_in_hong_kong, is_in_macao, is_in_taiwan, regions_containing};
pub use fence::{FenceShape, Geofence};
pub use index::FenceIndex;
pub use ray_cast::{contains as polygon_contains, on_boundary};
pub use service::{Classification, FenceService};
pub use shape::RegionShape;
