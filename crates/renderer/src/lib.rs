//! Raster rendering of temperature fields.
//!
//! Implements:
//! - Colors and ARGB pixel packing
//! - Piecewise-linear color scales (code presets or JSON definitions)
//! - Slippy map tile rendering (256x256) and equirectangular globe rendering

pub mod color;
pub mod config;
pub mod error;
pub mod render;
pub mod scale;

pub use color::Color;
pub use config::RenderConfig;
pub use error::{RenderError, ScaleError};
pub use render::{
    globe_location, render_globe, render_globe_with, render_tile, render_tile_with, PixelBuffer,
};
pub use scale::{ColorScale, ColorSpec, ColorStop, ScaleConfig, ScaleDefinition, StopDefinition};
