//! Spatial index for geofence lookups.

use rstar::{RTree, RTreeObject, AABB};
use std::sync::Arc;
use tracing::{debug, info};

use super::Geofence;
use crate::models::{Coordinate, Region};

/// Wrapper for R-tree indexing of geofences
#[derive(Clone)]
pub struct IndexedFence {
    pub fence: Arc<Geofence>,
    /// Position in the build input, used to keep lookup results stable
    order: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedFence {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl IndexedFence {
    pub fn new(fence: Geofence, order: usize) -> Option<Self> {
        let (min_x, min_y, max_x, max_y) = fence.bbox()?;
        Some(Self {
            fence: Arc::new(fence),
            order,
            envelope: AABB::from_corners([min_x, min_y], [max_x, max_y]),
        })
    }
}

/// Geofences indexed by envelope
pub struct FenceIndex {
    tree: RTree<IndexedFence>,
    /// Fences in build order
    ordered: Vec<Arc<Geofence>>,
}

impl FenceIndex {
    /// Build the index. Fences with an empty shape can never match and are skipped.
    pub fn build(fences: Vec<Geofence>) -> Self {
        info!("Building fence index for {} fences...", fences.len());

        let mut indexed = Vec::with_capacity(fences.len());
        for (order, fence) in fences.into_iter().enumerate() {
            let name = fence.name.clone();
            match IndexedFence::new(fence, order) {
                Some(ib) => indexed.push(ib),
                None => debug!("Skipping fence '{}' with empty shape", name),
            }
        }

        let ordered = indexed.iter().map(|ib| Arc::clone(&ib.fence)).collect();
        let tree = RTree::bulk_load(indexed);

        info!("Fence index built with {} entries", tree.size());

        Self { tree, ordered }
    }

    /// Index over the bundled regions
    pub fn builtin() -> Self {
        Self::build(Region::all().iter().copied().map(Geofence::from).collect())
    }

    /// Find all fences containing a point, in build order
    pub fn lookup(&self, point: Coordinate) -> Vec<Arc<Geofence>> {
        let query_envelope = AABB::from_point([point.longitude, point.latitude]);

        // Envelope intersection narrows the candidates, the exact test decides
        let mut hits: Vec<&IndexedFence> = self
            .tree
            .locate_in_envelope_intersecting(&query_envelope)
            .filter(|ib| ib.fence.contains(point))
            .collect();

        hits.sort_by_key(|ib| ib.order);
        hits.into_iter().map(|ib| Arc::clone(&ib.fence)).collect()
    }

    /// Get a fence by name
    pub fn get(&self, name: &str) -> Option<&Arc<Geofence>> {
        self.ordered.iter().find(|f| f.name == name)
    }

    /// Get total number of indexed fences
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Iterate over all indexed fences in build order
    pub fn fences(&self) -> impl Iterator<Item = &Arc<Geofence>> {
        self.ordered.iter()
    }
}
