//! Error types for rendering.

use geo_common::GeoError;
use thiserror::Error;

/// Errors raised while loading or building color scales.
#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Scale not found: {0}")]
    NotFound(String),
}

/// Errors raised by the renderer entry points.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid image dimensions {width}x{height}: both must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid render configuration: {0}")]
    Config(String),

    #[error("Invalid tile: {0}")]
    Geo(#[from] GeoError),
}
