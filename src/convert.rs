//! Conversions between RGB, hex strings and HSV.
//!
//! Colors are plain 8-bit sRGB triples ([`Color`]). Hex strings use the
//! `#rrggbbaa` layout when an alpha byte is attached and `#rrggbb` otherwise.

use palette::{FromColor, Hsv, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// An 8-bit sRGB color as produced by clustering.
pub type Color = Srgb<u8>;

/// Hue/saturation/value derived from a [`Color`].
///
/// `value` is the largest channel on the same 0-255 scale the clustering
/// step works on, so two colors compare by brightness without rounding noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvColor {
    /// Hue in degrees, `[0, 360)`
    pub hue: f32,
    /// Saturation, `[0, 1]`
    pub saturation: f32,
    /// Brightness, `0..=255`
    pub value: u8,
}

/// Format `color` with an alpha byte as `#rrggbbaa` (lowercase, zero padded).
pub fn rgb_to_hex(color: Color, alpha: u8) -> String {
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        color.red, color.green, color.blue, alpha
    )
}

/// Format `color` as `#rrggbb` without alpha.
pub fn rgb_to_hex_code(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Split a hex string into three equal-width groups and parse each as base 16.
///
/// A leading `#` is optional. `"#fff"` yields `(15, 15, 15)` and
/// `"#ff8000"` yields `(255, 128, 0)`; wider groups produce wider values.
pub fn hex_to_rgb(hex: &str) -> Result<(u32, u32, u32)> {
    let digits = hex.trim_start_matches('#');

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(PaletteError::format(
            hex,
            format!("unexpected character {bad:?}"),
        ));
    }
    if digits.is_empty() || digits.len() % 3 != 0 {
        return Err(PaletteError::format(
            hex,
            format!("length {} is not a positive multiple of 3", digits.len()),
        ));
    }

    let width = digits.len() / 3;
    if width > 8 {
        return Err(PaletteError::format(hex, "channel wider than 32 bits"));
    }

    let channel = |i: usize| {
        u32::from_str_radix(&digits[i * width..(i + 1) * width], 16)
            .map_err(|e| PaletteError::format(hex, e.to_string()))
    };

    Ok((channel(0)?, channel(1)?, channel(2)?))
}

/// Parse a hex string into an 8-bit [`Color`], rejecting channels above 255.
pub fn parse_color(hex: &str) -> Result<Color> {
    let (r, g, b) = hex_to_rgb(hex)?;
    let narrow = |v: u32| {
        u8::try_from(v).map_err(|_| PaletteError::format(hex, format!("channel {v} exceeds 255")))
    };
    Ok(Srgb::new(narrow(r)?, narrow(g)?, narrow(b)?))
}

/// Standard RGB to HSV conversion.
pub fn rgb_to_hsv(color: Color) -> HsvColor {
    let hsv: Hsv = Hsv::from_color(color.into_format::<f32>());

    HsvColor {
        hue: hsv.hue.into_positive_degrees(),
        saturation: hsv.saturation,
        value: color.red.max(color.green).max(color.blue),
    }
}

/// Readable label color for text drawn on top of `color`.
///
/// White when the mean channel intensity is below the midpoint, black
/// otherwise. A cheap heuristic, not a WCAG contrast ratio.
pub fn contrast_text(color: Color) -> Color {
    let sum = color.red as u32 + color.green as u32 + color.blue as u32;
    if sum < 3 * 128 {
        Srgb::new(255, 255, 255)
    } else {
        Srgb::new(0, 0, 0)
    }
}
