//! Ocean basin and latitude band classification.
//!
//! The bounding boxes are coarse: basins overlap and large strips of ocean
//! fall in none of them. Map and search consumers depend on these exact
//! bounds, so they must not be tightened into real basin polygons.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::FloatQueryError;

/// Latitude separating the equatorial band from the north/south bands
const TROPIC_LAT: f64 = 23.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionLabel {
    Atlantic,
    Pacific,
    Indian,
    North,
    South,
    Equatorial,
}

impl RegionLabel {
    pub const ALL: [RegionLabel; 6] = [
        RegionLabel::Atlantic,
        RegionLabel::Pacific,
        RegionLabel::Indian,
        RegionLabel::North,
        RegionLabel::South,
        RegionLabel::Equatorial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionLabel::Atlantic => "atlantic",
            RegionLabel::Pacific => "pacific",
            RegionLabel::Indian => "indian",
            RegionLabel::North => "north",
            RegionLabel::South => "south",
            RegionLabel::Equatorial => "equatorial",
        }
    }

    /// Whether `(lat, lon)` falls inside this label's bounds
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        match self {
            RegionLabel::Atlantic => is_atlantic(lat, lon),
            RegionLabel::Pacific => is_pacific(lat, lon),
            RegionLabel::Indian => is_indian(lat, lon),
            RegionLabel::North => is_north(lat),
            RegionLabel::South => is_south(lat),
            RegionLabel::Equatorial => is_equatorial(lat),
        }
    }
}

impl fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionLabel {
    type Err = FloatQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "atlantic" => Ok(RegionLabel::Atlantic),
            "pacific" => Ok(RegionLabel::Pacific),
            "indian" => Ok(RegionLabel::Indian),
            "north" | "arctic" => Ok(RegionLabel::North),
            "south" | "southern" | "antarctic" => Ok(RegionLabel::South),
            "equatorial" | "equator" => Ok(RegionLabel::Equatorial),
            _ => Err(FloatQueryError::UnknownRegion(s.to_string())),
        }
    }
}

/// `lon >= 120 || lon <= -70`, `|lat| <= 60`
pub fn is_pacific(lat: f64, lon: f64) -> bool {
    (lon >= 120.0 || lon <= -70.0) && lat.abs() <= 60.0
}

/// `-70 <= lon <= 20`, `|lat| <= 60`
pub fn is_atlantic(lat: f64, lon: f64) -> bool {
    (-70.0..=20.0).contains(&lon) && lat.abs() <= 60.0
}

/// `20 <= lon <= 120`, `-60 <= lat <= 30`
pub fn is_indian(lat: f64, lon: f64) -> bool {
    (20.0..=120.0).contains(&lon) && (-60.0..=30.0).contains(&lat)
}

pub fn is_north(lat: f64) -> bool {
    lat > TROPIC_LAT
}

pub fn is_south(lat: f64) -> bool {
    lat < -TROPIC_LAT
}

pub fn is_equatorial(lat: f64) -> bool {
    lat.abs() <= TROPIC_LAT
}

/// Every label whose bounds contain `(lat, lon)`
pub fn classify(lat: f64, lon: f64) -> BTreeSet<RegionLabel> {
    RegionLabel::ALL
        .into_iter()
        .filter(|label| label.contains(lat, lon))
        .collect()
}

/// Single basin name for summaries.
///
/// Overlaps resolve indian, then atlantic, then pacific. Points outside all
/// three but south of the tropic count as "southern".
pub fn primary_basin(lat: f64, lon: f64) -> Option<&'static str> {
    if is_indian(lat, lon) {
        Some("indian")
    } else if is_atlantic(lat, lon) {
        Some("atlantic")
    } else if is_pacific(lat, lon) {
        Some("pacific")
    } else if is_south(lat) {
        Some("southern")
    } else {
        None
    }
}
