//! Built-in administrative regions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Regions with bundled boundary data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Taiwan island plus the Penghu islands, approximated by two boxes
    Taiwan,
    /// Hong Kong SAR, boundary per State Council Order No. 221 (1997)
    HongKong,
    /// Macao SAR, land and sea boundary per State Council Order No. 665 (2015)
    Macao,
}

impl Region {
    /// All regions in a stable order
    pub fn all() -> &'static [Region] {
        &[Region::Taiwan, Region::HongKong, Region::Macao]
    }

    /// Machine name, also used as the fence name in lookups
    pub fn slug(&self) -> &'static str {
        match self {
            Region::Taiwan => "taiwan",
            Region::HongKong => "hong_kong",
            Region::Macao => "macao",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Taiwan => "Taiwan",
            Region::HongKong => "Hong Kong",
            Region::Macao => "Macao",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown region {0:?}")]
pub struct ParseRegionError(pub String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(&['-', ' '][..], "_");
        Region::all()
            .iter()
            .copied()
            .find(|r| r.slug() == wanted)
            .ok_or_else(|| ParseRegionError(s.to_string()))
    }
}
