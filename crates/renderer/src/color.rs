//! RGB colors and ARGB pixel packing.

use serde::{Deserialize, Serialize};

/// An RGB color.
///
/// Channels are nominally 0-255 but are stored as `i32` and kept as-is,
/// so a scale that interpolates outside that range is not silently
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Linear interpolation towards `other`, rounding half away from zero.
    ///
    /// `t` is not clamped; callers pass a fraction within the bracketing
    /// stops.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let channel = |a: i32, b: i32| -> i32 { (a as f64 + t * (b - a) as f64).round() as i32 };
        Color::new(
            channel(self.red, other.red),
            channel(self.green, other.green),
            channel(self.blue, other.blue),
        )
    }

    /// Pack into an ARGB pixel, one byte per channel.
    ///
    /// Only the low 8 bits of each channel are kept.
    pub fn to_argb(&self, alpha: u8) -> u32 {
        (alpha as u32) << 24
            | ((self.red as u32) & 0xFF) << 16
            | ((self.green as u32) & 0xFF) << 8
            | ((self.blue as u32) & 0xFF)
    }

    /// Unpack the color part of an ARGB pixel.
    pub fn from_argb(pixel: u32) -> Color {
        Color::new(
            ((pixel >> 16) & 0xFF) as i32,
            ((pixel >> 8) & 0xFF) as i32,
            (pixel & 0xFF) as i32,
        )
    }

    /// Parse "#RRGGBB" (the leading '#' is optional).
    pub fn from_hex(hex: &str) -> Option<Color> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color::new(r as i32, g as i32, b as i32))
    }

    /// Look up a basic named color.
    pub fn from_name(name: &str) -> Option<Color> {
        let rgb = match name.to_lowercase().as_str() {
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "red" => (255, 0, 0),
            "green" => (0, 255, 0),
            "blue" => (0, 0, 255),
            "yellow" => (255, 255, 0),
            "cyan" => (0, 255, 255),
            "magenta" => (255, 0, 255),
            "orange" => (255, 165, 0),
            "purple" => (128, 0, 128),
            "gray" | "grey" => (128, 128, 128),
            _ => return None,
        };
        Some(Color::new(rgb.0, rgb.1, rgb.2))
    }
}

/// Split an ARGB pixel into RGBA bytes.
pub fn argb_to_rgba(pixel: u32) -> [u8; 4] {
    [
        (pixel >> 16) as u8,
        (pixel >> 8) as u8,
        pixel as u8,
        (pixel >> 24) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_packing() {
        let color = Color::new(0x12, 0x34, 0x56);
        assert_eq!(color.to_argb(127), 0x7F12_3456);
        assert_eq!(Color::from_argb(color.to_argb(255)), color);
        assert_eq!(argb_to_rgba(0x7F12_3456), [0x12, 0x34, 0x56, 0x7F]);
    }

    #[test]
    fn test_out_of_range_channels_are_kept() {
        let color = Color::new(300, -20, 128);
        assert_eq!(color.red, 300);
        assert_eq!(color.green, -20);
        // Packing keeps the low byte only
        assert_eq!(color.to_argb(0) & 0x00FF_0000, (300 & 0xFF) << 16);
    }

    #[test]
    fn test_lerp_rounds_half_away_from_zero() {
        let a = Color::new(0, 0, 255);
        let b = Color::new(255, 255, 0);
        assert_eq!(a.lerp(&b, 0.5), Color::new(128, 128, 128));
        assert_eq!(Color::new(0, 0, 0).lerp(&Color::new(-1, -3, 1), 0.5), Color::new(-1, -2, 1));
    }

    #[test]
    fn test_hex_and_names() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::new(255, 0, 0)));
        assert_eq!(Color::from_hex("00ff7f"), Some(Color::new(0, 255, 127)));
        assert_eq!(Color::from_hex("#GGGGGG"), None);
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_name("Magenta"), Some(Color::new(255, 0, 255)));
        assert_eq!(Color::from_name("chartreuse"), None);
    }
}
