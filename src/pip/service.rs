//! Lookup service returning the fences that contain a point.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::FenceIndex;
use crate::models::Coordinate;

/// Fences containing one point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub point: Coordinate,
    /// Fence names in index build order
    pub fences: Vec<String>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.fences.is_empty()
    }
}

/// Point-in-fence lookup service
pub struct FenceService {
    index: FenceIndex,
}

impl FenceService {
    /// Create a new service from a fence index
    pub fn new(index: FenceIndex) -> Self {
        Self { index }
    }

    pub fn classify(&self, point: Coordinate) -> Classification {
        let fences: Vec<String> = self
            .index
            .lookup(point)
            .iter()
            .map(|f| f.name.clone())
            .collect();

        debug!("Lookup at {}: {} fences", point, fences.len());

        Classification { point, fences }
    }

    /// Classify many points in parallel. Output order follows input order.
    pub fn classify_all(&self, points: &[Coordinate]) -> Vec<Classification> {
        points.par_iter().map(|p| self.classify(*p)).collect()
    }

    /// Get the fence index (for stats/debugging)
    pub fn index(&self) -> &FenceIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index() {
        let service = FenceService::new(FenceIndex::build(vec![]));
        assert!(service.classify(Coordinate::new(22.5, 114.1)).is_empty());
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let service = FenceService::new(FenceIndex::builtin());
        let points = vec![
            Coordinate::new(22.5, 114.1),
            Coordinate::new(0.0, 0.0),
            Coordinate::new(23.7, 121.0),
            Coordinate::new(22.15, 113.58),
        ];

        let results = service.classify_all(&points);

        let fences: Vec<Vec<String>> = results.iter().map(|c| c.fences.clone()).collect();
        assert_eq!(
            fences,
            vec![
                vec!["hong_kong".to_string()],
                vec![],
                vec!["taiwan".to_string()],
                vec!["macao".to_string()],
            ]
        );
        for (result, point) in results.iter().zip(&points) {
            assert_eq!(result.point, *point);
        }
    }

    #[test]
    fn test_serializes_as_record() {
        let service = FenceService::new(FenceIndex::builtin());
        let json = serde_json::to_value(service.classify(Coordinate::new(22.5, 114.1))).unwrap();
        assert_eq!(json["fences"][0], "hong_kong");
        assert_eq!(json["point"]["latitude"], 22.5);
    }
}
