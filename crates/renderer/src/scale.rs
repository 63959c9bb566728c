//! Piecewise-linear color scales.
//!
//! A [`ColorScale`] maps a value to a color by interpolating between the
//! two stops that bracket it. Scales can be built in code or loaded from a
//! JSON definition:
//!
//! ```json
//! {
//!     "version": "1.0",
//!     "scales": {
//!         "temperature": {
//!             "name": "Temperature",
//!             "units": "C",
//!             "stops": [
//!                 {"value": 60, "color": [255, 255, 255]},
//!                 {"value": 32, "color": "#FF0000"},
//!                 {"value": 0, "color": "cyan"}
//!             ]
//!         }
//!     }
//! }
//! ```

use crate::{Color, ScaleError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// A value/color pair of a scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub value: f64,
    pub color: Color,
}

impl ColorStop {
    pub fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

impl From<(f64, Color)> for ColorStop {
    fn from((value, color): (f64, Color)) -> Self {
        Self { value, color }
    }
}

/// Sorted stops stored as parallel key and color sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorScale {
    keys: Vec<f64>,
    colors: Vec<Color>,
}

impl ColorScale {
    /// Build a scale from stops in any order.
    ///
    /// Stops are sorted by value; stops with equal values keep their
    /// original relative order.
    pub fn new<I>(stops: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ColorStop>,
    {
        let mut stops: Vec<ColorStop> = stops.into_iter().map(Into::into).collect();
        stops.sort_by(|a, b| a.value.total_cmp(&b.value));

        if stops.windows(2).any(|pair| pair[0].value == pair[1].value) {
            warn!("Color scale has duplicate stop values; the first one wins on exact matches");
        }

        let (keys, colors) = stops.into_iter().map(|stop| (stop.value, stop.color)).unzip();
        Self { keys, colors }
    }

    /// Parse a single scale definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, ScaleError> {
        let definition: ScaleDefinition = serde_json::from_str(json)?;
        definition.build()
    }

    /// Load a single scale definition from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScaleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Color for `value`.
    ///
    /// - no stops: black
    /// - exact key: that stop's color (the first one for duplicate keys)
    /// - below the lowest / above the highest key: that extreme stop's color
    /// - otherwise: per-channel interpolation between the bracketing stops
    pub fn color_at(&self, value: f64) -> Color {
        if self.keys.is_empty() {
            return Color::BLACK;
        }

        // First index whose key is >= value
        let index = self.keys.partition_point(|&key| key < value);

        if index == self.keys.len() {
            return self.colors[index - 1];
        }
        if self.keys[index] == value || index == 0 {
            return self.colors[index];
        }

        let (k0, k1) = (self.keys[index - 1], self.keys[index]);
        let alpha = (value - k0) / (k1 - k0);
        self.colors[index - 1].lerp(&self.colors[index], alpha)
    }

    /// Standard scale for absolute temperatures in Celsius.
    pub fn temperatures() -> Self {
        Self::new([
            (60.0, Color::new(255, 255, 255)),
            (32.0, Color::new(255, 0, 0)),
            (12.0, Color::new(255, 255, 0)),
            (0.0, Color::new(0, 0, 255)),
            (-15.0, Color::new(0, 0, 255)),
            (-27.0, Color::new(255, 0, 255)),
            (-50.0, Color::new(33, 0, 107)),
            (-60.0, Color::new(0, 0, 5)),
        ])
    }

    /// Standard scale for temperature deviations from normals in Celsius.
    pub fn deviations() -> Self {
        Self::new([
            (7.0, Color::new(0, 0, 0)),
            (4.0, Color::new(255, 0, 0)),
            (2.0, Color::new(255, 255, 0)),
            (0.0, Color::new(255, 255, 255)),
            (-2.0, Color::new(0, 255, 255)),
            (-7.0, Color::new(0, 0, 255)),
        ])
    }
}

impl FromIterator<ColorStop> for ColorScale {
    fn from_iter<I: IntoIterator<Item = ColorStop>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Scale definitions loaded from JSON, keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Version of the scale schema
    #[serde(default = "default_version")]
    pub version: String,

    /// Named scale definitions
    pub scales: HashMap<String, ScaleDefinition>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl ScaleConfig {
    /// Parse scale configuration from JSON string.
    pub fn from_json(json: &str) -> Result<Self, ScaleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load scale configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScaleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build the named scale.
    pub fn scale(&self, name: &str) -> Result<ColorScale, ScaleError> {
        self.scales
            .get(name)
            .ok_or_else(|| ScaleError::NotFound(name.to_string()))?
            .build()
    }
}

/// A single scale as written in JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleDefinition {
    /// Human-readable name
    pub name: String,

    /// Unit label for display
    #[serde(default)]
    pub units: Option<String>,

    /// Stops in any order
    pub stops: Vec<StopDefinition>,
}

impl ScaleDefinition {
    pub fn build(&self) -> Result<ColorScale, ScaleError> {
        let stops = self
            .stops
            .iter()
            .map(|stop| Ok(ColorStop::new(stop.value, stop.color.to_color()?)))
            .collect::<Result<Vec<_>, ScaleError>>()?;
        Ok(ColorScale::new(stops))
    }
}

/// A stop as written in JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDefinition {
    pub value: f64,
    pub color: ColorSpec,
}

/// Color notation accepted in scale definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// RGB array: [r, g, b]
    Array(Vec<i32>),

    /// Hex string "#RRGGBB" or a basic color name
    Text(String),
}

impl ColorSpec {
    pub fn to_color(&self) -> Result<Color, ScaleError> {
        match self {
            ColorSpec::Array(channels) => match channels.as_slice() {
                &[r, g, b] => Ok(Color::new(r, g, b)),
                _ => Err(ScaleError::InvalidColor(format!("{:?}", channels))),
            },
            ColorSpec::Text(text) if text.starts_with('#') => {
                Color::from_hex(text).ok_or_else(|| ScaleError::InvalidColor(text.clone()))
            }
            ColorSpec::Text(text) => {
                Color::from_name(text).ok_or_else(|| ScaleError::InvalidColor(text.clone()))
            }
        }
    }
}
