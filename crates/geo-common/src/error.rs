//! Error types for geographic primitives.

use thiserror::Error;

/// Result type alias using GeoError.
pub type GeoResult<T> = Result<T, GeoError>;

/// Errors raised by the validating constructors.
///
/// The numeric operations themselves never fail; these are only produced
/// when a caller explicitly asks for range checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("Invalid location ({lat}, {lon}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidLocation { lat: f64, lon: f64 },

    #[error("Invalid tile {zoom}/{x}/{y}: x and y must be below {limit}")]
    InvalidTile { x: u32, y: u32, zoom: u32, limit: u64 },

    #[error("Invalid zoom level {0}: must be at most {max}", max = crate::tile::MAX_ZOOM)]
    InvalidZoom(u32),
}
