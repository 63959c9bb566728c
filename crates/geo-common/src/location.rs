//! Locations on the globe and the integer-degree lattice.

use crate::{GeoError, GeoResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Observations closer than this (in radians) are treated as co-located.
pub const EXACT_MATCH_RADIANS: f64 = 1e-6;

/// A point on the globe in degrees.
///
/// Equality is exact floating point equality, which is what is used to
/// detect co-located samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees, [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, [-180, 180]
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a location, rejecting coordinates outside the valid ranges.
    pub fn try_new(lat: f64, lon: f64) -> GeoResult<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::InvalidLocation { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Whether `other` is the exact antipode of this location.
    pub fn is_antipode_of(&self, other: &Location) -> bool {
        self.lat + other.lat == 0.0 && (self.lon - other.lon).rem_euclid(360.0) == 180.0
    }

    /// Angular distance to another location in radians.
    pub fn distance_to(&self, other: &Location) -> f64 {
        great_circle_distance(self, other)
    }
}

/// A single scalar observation (e.g. a station's temperature) at a location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub location: Location,
    pub value: f64,
}

impl Observation {
    pub fn new(location: Location, value: f64) -> Self {
        Self { location, value }
    }
}

impl From<(Location, f64)> for Observation {
    fn from((location, value): (Location, f64)) -> Self {
        Self { location, value }
    }
}

/// Great-circle distance between two locations on the unit sphere, in radians.
///
/// Identical points and exact antipodes are answered directly; the acos
/// argument is clamped so rounding can never push it out of [-1, 1].
pub fn great_circle_distance(a: &Location, b: &Location) -> f64 {
    if a == b {
        return 0.0;
    }
    if a.is_antipode_of(b) {
        return PI;
    }

    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_lambda = (a.lon - b.lon).abs().to_radians();

    let cos_angle = phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * delta_lambda.cos();
    cos_angle.clamp(-1.0, 1.0).acos()
}

/// A point of the global one-degree lattice.
///
/// Latitude runs over [-89, 90] and longitude over [-180, 179], giving
/// 180 x 360 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridLocation {
    pub lat: i32,
    pub lon: i32,
}

impl GridLocation {
    pub const MIN_LAT: i32 = -89;
    pub const MAX_LAT: i32 = 90;
    pub const MIN_LON: i32 = -180;
    pub const MAX_LON: i32 = 179;

    /// Number of lattice points on the globe.
    pub const COUNT: usize = 180 * 360;

    pub fn new(lat: i32, lon: i32) -> Self {
        Self { lat, lon }
    }

    /// The continuous location of this lattice point.
    pub fn location(&self) -> Location {
        Location::new(self.lat as f64, self.lon as f64)
    }

    /// Whether the point lies inside the global lattice ranges.
    pub fn is_valid(&self) -> bool {
        (Self::MIN_LAT..=Self::MAX_LAT).contains(&self.lat)
            && (Self::MIN_LON..=Self::MAX_LON).contains(&self.lon)
    }

    /// Every lattice point, row by row from the north-west corner.
    pub fn all() -> impl Iterator<Item = GridLocation> {
        (Self::MIN_LAT..=Self::MAX_LAT)
            .rev()
            .flat_map(|lat| (Self::MIN_LON..=Self::MAX_LON).map(move |lon| GridLocation { lat, lon }))
    }
}

/// Fractional position inside one lattice cell, both axes in [0, 1].
///
/// `y = 0` is the northern edge, matching image row order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPoint {
    pub x: f64,
    pub y: f64,
}

impl CellPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
