//! Configuration for the renderer.

use crate::RenderError;
use serde::{Deserialize, Serialize};

/// Largest tile subdivision accepted by [`RenderConfig::validate`].
pub const MAX_TILE_DELTA_ZOOM: u32 = 10;

/// Configuration for tile and globe rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Subdivision depth of a rendered tile; the image is 2^n pixels square.
    pub tile_delta_zoom: u32,

    /// Alpha of tile pixels, translucent so tiles overlay a base map.
    pub tile_alpha: u8,

    /// Alpha of globe pixels.
    pub globe_alpha: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_delta_zoom: 8,
            tile_alpha: 127,
            globe_alpha: 255,
        }
    }
}

impl RenderConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("TILE_DELTA_ZOOM") {
            if let Ok(dz) = val.parse() {
                config.tile_delta_zoom = dz;
            }
        }

        if let Ok(val) = std::env::var("TILE_ALPHA") {
            if let Ok(alpha) = val.parse() {
                config.tile_alpha = alpha;
            }
        }

        if let Ok(val) = std::env::var("GLOBE_ALPHA") {
            if let Ok(alpha) = val.parse() {
                config.globe_alpha = alpha;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.tile_delta_zoom > MAX_TILE_DELTA_ZOOM {
            return Err(RenderError::Config(format!(
                "tile_delta_zoom must be <= {}",
                MAX_TILE_DELTA_ZOOM
            )));
        }

        Ok(())
    }

    /// Edge length of a rendered tile in pixels.
    pub fn tile_size(&self) -> u32 {
        1 << self.tile_delta_zoom
    }
}
