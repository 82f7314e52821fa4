//! Shared primitive types used across the entire simulation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The canonical city identifier (a UUID string once a game has started).
pub type CityId = String;

/// Land use of a single grid cell.
///
/// Persisted as its numeric code (0..=3) so saved grids stay compact and
/// readable as rows of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ZoneCode {
    #[default]
    Empty,
    Residential,
    Commercial,
    Industrial,
}

impl ZoneCode {
    /// Every zone code, in numeric order. Random generation draws from this.
    pub const ALL: [ZoneCode; 4] = [
        ZoneCode::Empty,
        ZoneCode::Residential,
        ZoneCode::Commercial,
        ZoneCode::Industrial,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Empty       => "empty",
            Self::Residential => "residential",
            Self::Commercial  => "commercial",
            Self::Industrial  => "industrial",
        }
    }
}

impl From<ZoneCode> for u8 {
    fn from(zone: ZoneCode) -> u8 {
        zone.code()
    }
}

impl TryFrom<u8> for ZoneCode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ZoneCode::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| format!("unknown zone code {code}"))
    }
}

impl FromStr for ZoneCode {
    type Err = String;

    /// Accepts either the numeric code or the zone name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return ZoneCode::try_from(code);
        }
        ZoneCode::ALL
            .iter()
            .copied()
            .find(|z| z.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown zone '{s}'"))
    }
}

impl fmt::Display for ZoneCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed set of tracked city resources.
/// Declaration order is the display and iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Money,
    Power,
    Water,
    Food,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Money,
        Resource::Power,
        Resource::Water,
        Resource::Food,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Money => "money",
            Self::Power => "power",
            Self::Water => "water",
            Self::Food  => "food",
        }
    }

    /// Capitalised label used in text reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Money => "Money",
            Self::Power => "Power",
            Self::Water => "Water",
            Self::Food  => "Food",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
