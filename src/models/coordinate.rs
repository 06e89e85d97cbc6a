//! Geographic value types: coordinates and latitude/longitude boxes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// WGS-84 coordinate in degrees.
///
/// No normalization or range checks are applied; any `f64` pair is accepted
/// and simply flows through the containment arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon", alias = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both components are finite (not NaN or infinite)
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

// geo works in (x, y) = (lon, lat)
impl From<Coordinate> for geo_types::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo_types::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<geo_types::Coord<f64>> for Coordinate {
    fn from(c: geo_types::Coord<f64>) -> Self {
        Self::new(c.y, c.x)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseCoordinateError {
    #[error("expected \"lat,lon\", got {0:?}")]
    Format(String),
    #[error("invalid {axis} value {value:?}")]
    Number { axis: &'static str, value: String },
}

/// Parses `"lat,lon"` (whitespace around either number is ignored)
impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| ParseCoordinateError::Format(s.to_string()))?;

        let parse = |axis: &'static str, value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| ParseCoordinateError::Number {
                    axis,
                    value: value.trim().to_string(),
                })
        };

        Ok(Self::new(parse("latitude", lat)?, parse("longitude", lon)?))
    }
}

/// Axis-aligned latitude/longitude rectangle.
///
/// All four bounds are exclusive: a point whose latitude or longitude equals a
/// bound is outside the box. This is the boundary policy for every rectangle
/// test in the crate, not an artifact of the comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    pub const fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Self {
        Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        }
    }

    /// Strict containment test
    pub fn contains(&self, point: Coordinate) -> bool {
        point.latitude > self.min_latitude
            && point.latitude < self.max_latitude
            && point.longitude > self.min_longitude
            && point.longitude < self.max_longitude
    }

    /// The four corners, counter-clockwise from the south-west
    pub fn corners(&self) -> [Coordinate; 4] {
        [
            Coordinate::new(self.min_latitude, self.min_longitude),
            Coordinate::new(self.min_latitude, self.max_longitude),
            Coordinate::new(self.max_latitude, self.max_longitude),
            Coordinate::new(self.max_latitude, self.min_longitude),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        let c: Coordinate = "22.5, 114.1".parse().unwrap();
        assert_eq!(c, Coordinate::new(22.5, 114.1));

        let c: Coordinate = "-33.9,151.2".parse().unwrap();
        assert_eq!(c.latitude, -33.9);
        assert_eq!(c.longitude, 151.2);
    }

    #[test]
    fn test_parse_coordinate_errors() {
        assert_eq!(
            "22.5".parse::<Coordinate>(),
            Err(ParseCoordinateError::Format("22.5".to_string()))
        );
        assert_eq!(
            "22.5,east".parse::<Coordinate>(),
            Err(ParseCoordinateError::Number {
                axis: "longitude",
                value: "east".to_string()
            })
        );
    }

    #[test]
    fn test_geo_coord_axis_order() {
        let c = Coordinate::new(22.5, 114.1);
        let g: geo_types::Coord<f64> = c.into();
        assert_eq!(g.x, 114.1);
        assert_eq!(g.y, 22.5);
        assert_eq!(Coordinate::from(g), c);
    }

    #[test]
    fn test_deserialize_short_names() {
        let c: Coordinate = serde_json::from_str(r#"{"lat": 1.5, "lon": 2.5}"#).unwrap();
        assert_eq!(c, Coordinate::new(1.5, 2.5));
    }

    #[test]
    fn test_box_bounds_are_exclusive() {
        let b = BoundingBox::new(0.0, 1.0, 10.0, 11.0);
        assert!(b.contains(Coordinate::new(0.5, 10.5)));
        assert!(!b.contains(Coordinate::new(0.0, 10.5)));
        assert!(!b.contains(Coordinate::new(1.0, 10.5)));
        assert!(!b.contains(Coordinate::new(0.5, 10.0)));
        assert!(!b.contains(Coordinate::new(0.5, 11.0)));
    }

    #[test]
    fn test_box_rejects_nan() {
        let b = BoundingBox::new(0.0, 1.0, 10.0, 11.0);
        assert!(!b.contains(Coordinate::new(f64::NAN, 10.5)));
        assert!(!b.contains(Coordinate::new(0.5, f64::NAN)));
    }
}
