//! Geofence configuration files.
//!
//! ```toml
//! include_builtin = true
//!
//! [[fences]]
//! name = "airport"
//! vertices = [
//!     { lat = 22.33, lon = 113.89 },
//!     { lat = 22.33, lon = 113.95 },
//!     { lat = 22.29, lon = 113.92 },
//! ]
//!
//! [[fences]]
//! name = "grid"
//! boxes = [{ min_latitude = 22.0, max_latitude = 22.1, min_longitude = 114.0, max_longitude = 114.1 }]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{BoundingBox, Coordinate, Region};
use crate::pip::{FenceShape, Geofence};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Add the bundled regions ahead of the configured fences
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,

    #[serde(default)]
    pub fences: Vec<FenceConfig>,
}

fn default_include_builtin() -> bool {
    true
}

/// One fence; exactly one of `vertices` or `boxes` must be given
#[derive(Debug, Deserialize, Clone)]
pub struct FenceConfig {
    pub name: String,
    pub vertices: Option<Vec<Coordinate>>,
    pub boxes: Option<Vec<BoundingBox>>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fence '{0}' needs either `vertices` or `boxes`")]
    MissingShape(String),
    #[error("fence '{0}' has both `vertices` and `boxes`")]
    AmbiguousShape(String),
    #[error("fence name '{0}' is used more than once")]
    DuplicateName(String),
    #[error("fence '{0}' has a non-finite coordinate")]
    NonFinite(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_builtin: true,
            fences: Vec::new(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read fence config file")?;
        let config: Config =
            toml::from_str(&content).context("Failed to parse fence config file")?;
        info!("Loaded {} configured fences", config.fences.len());
        Ok(config)
    }

    /// Validate and convert to geofences, built-ins first
    pub fn into_fences(self) -> Result<Vec<Geofence>, ConfigError> {
        let mut fences: Vec<Geofence> = Vec::new();
        if self.include_builtin {
            fences.extend(Region::all().iter().copied().map(Geofence::from));
        }

        let mut seen: HashSet<String> = fences.iter().map(|f| f.name.clone()).collect();

        for entry in self.fences {
            if !seen.insert(entry.name.clone()) {
                return Err(ConfigError::DuplicateName(entry.name));
            }
            fences.push(entry.into_fence()?);
        }

        Ok(fences)
    }
}

impl FenceConfig {
    fn into_fence(self) -> Result<Geofence, ConfigError> {
        let shape = match (self.vertices, self.boxes) {
            (Some(vertices), None) => {
                if !vertices.iter().all(Coordinate::is_finite) {
                    return Err(ConfigError::NonFinite(self.name));
                }
                if vertices.len() < 3 {
                    warn!(
                        "Fence '{}' has {} vertices and will never match",
                        self.name,
                        vertices.len()
                    );
                }
                FenceShape::Polygon(vertices)
            }
            (None, Some(boxes)) => {
                let finite = boxes
                    .iter()
                    .flat_map(|b| b.corners())
                    .all(|c| c.is_finite());
                if !finite {
                    return Err(ConfigError::NonFinite(self.name));
                }
                FenceShape::Rectangles(boxes)
            }
            (Some(_), Some(_)) => return Err(ConfigError::AmbiguousShape(self.name)),
            (None, None) => return Err(ConfigError::MissingShape(self.name)),
        };

        Ok(Geofence::new(self.name, shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(toml_str: &str) -> Config {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[fences]]
name = "airport"
vertices = [
    {{ lat = 22.33, lon = 113.89 }},
    {{ lat = 22.33, lon = 113.95 }},
    {{ lat = 22.29, lon = 113.92 }},
]
"#
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert!(config.include_builtin);

        let fences = config.into_fences().unwrap();
        let names: Vec<&str> = fences.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["taiwan", "hong_kong", "macao", "airport"]);
        assert!(fences[3].contains(Coordinate::new(22.32, 113.92)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_boxes_without_builtins() {
        let config = parse(
            r#"
include_builtin = false

[[fences]]
name = "grid"
boxes = [{ min_latitude = 22.0, max_latitude = 22.1, min_longitude = 114.0, max_longitude = 114.1 }]
"#,
        );

        let fences = config.into_fences().unwrap();
        assert_eq!(fences.len(), 1);
        assert!(fences[0].contains(Coordinate::new(22.05, 114.05)));
    }

    #[test]
    fn test_validation_errors() {
        let missing = parse("[[fences]]\nname = \"a\"\n");
        assert_eq!(
            missing.into_fences().unwrap_err(),
            ConfigError::MissingShape("a".to_string())
        );

        let both = parse(
            r#"
[[fences]]
name = "b"
vertices = []
boxes = []
"#,
        );
        assert_eq!(
            both.into_fences().unwrap_err(),
            ConfigError::AmbiguousShape("b".to_string())
        );

        let shadow = parse("[[fences]]\nname = \"macao\"\nvertices = []\n");
        assert_eq!(
            shadow.into_fences().unwrap_err(),
            ConfigError::DuplicateName("macao".to_string())
        );

        let nan = parse("[[fences]]\nname = \"c\"\nvertices = [{ lat = nan, lon = 1.0 }]\n");
        assert_eq!(
            nan.into_fences().unwrap_err(),
            ConfigError::NonFinite("c".to_string())
        );
    }

    #[test]
    fn test_builtin_name_allowed_without_builtins() {
        let config = parse("include_builtin = false\n[[fences]]\nname = \"macao\"\nvertices = []\n");
        let fences = config.into_fences().unwrap();
        assert_eq!(fences[0].name, "macao");
        assert!(fences[0].region.is_none());
    }
}
