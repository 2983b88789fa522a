use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::utils::money;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region '{0}' (expected one of: north, east, south, west)")]
pub struct ParseRegionError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region filter '{0}' (expected 'all' or one of: north, east, south, west)")]
pub struct ParseFilterError(pub String);

/// Sales territory a record belongs to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    East,
    South,
    West,
}

impl Region {
    /// Every region, in the order the selector lists them.
    pub const ALL: [Region; 4] = [Region::North, Region::East, Region::South, Region::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "north",
            Region::East => "east",
            Region::South => "south",
            Region::West => "west",
        }
    }

    /// Capitalized name for labels ("North", "East", ...).
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::East => "East",
            Region::South => "South",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Region::North),
            "east" => Ok(Region::East),
            "south" => Ok(Region::South),
            "west" => Ok(Region::West),
            _ => Err(ParseRegionError(s.to_string())),
        }
    }
}

// Case-insensitive on the way in, lowercase on the way out.
impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Selector value: every region, or a single one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl RegionFilter {
    pub fn matches(&self, region: Region) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(selected) => *selected == region,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionFilter::All => "all",
            RegionFilter::Only(region) => region.as_str(),
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(RegionFilter::All);
        }
        s.parse::<Region>()
            .map(RegionFilter::Only)
            .map_err(|_| ParseFilterError(s.to_string()))
    }
}

impl From<Region> for RegionFilter {
    fn from(region: Region) -> Self {
        RegionFilter::Only(region)
    }
}

/// One row of a raw daily sales file. Only lives for the duration of a formatter run.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub product: String,
    pub price: String, // Raw text, currency symbol included (e.g. "$3.00")
    pub quantity: u32,
    pub date: NaiveDate,
    pub region: String,
    pub line: u64, // 1-based line in the source file, for error messages
}

/// One row of the normalized sales file: `sales,date,region`.
///
/// The region is stored canonically, so a raw `North` is written back as `north`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(serialize_with = "money::serialize_two_places")]
    pub sales: f64,
    pub date: NaiveDate,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub sales: f64,
}

/// Vertical annotation drawn at a fixed date, topped at `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceMarker {
    pub date: NaiveDate,
    pub label: String,
    pub y: f64,
}

/// Everything a renderer needs to draw the sales line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    #[serde(serialize_with = "serialize_filter")]
    pub filter: RegionFilter,
    pub points: Vec<ChartPoint>, // Ascending by date
    pub marker: PriceMarker,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_sales(&self) -> Option<f64> {
        self.points.iter().map(|p| p.sales).reduce(f64::max)
    }

    /// First and last date of the plotted series.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }
}

fn serialize_filter<S: serde::Serializer>(filter: &RegionFilter, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(filter.as_str())
}
