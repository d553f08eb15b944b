use palette::{LinSrgb, Srgb};
use serde::{Serialize, Serializer};

use crate::error::{BrandError, Result};

/// sRGB color with 8-bit channels.
///
/// Every value this type can hold is a valid `#rrggbb` color, so anything
/// wider than a byte goes through [`Color::from_clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integer channels, clamping each to [0, 255].
    pub fn from_clamped(r: i32, g: i32, b: i32) -> Self {
        let clamp = |v: i32| v.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Parse a hex color string like `#ff8800` or `FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(BrandError::InvalidHex {
                value: hex.to_string(),
                reason: format!("expected 6 hex digits, got {}", digits.len()),
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| BrandError::InvalidHex {
                value: hex.to_string(),
                reason: e.to_string(),
            })
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Mix toward white by `amount` (clamped to [0, 1]), rounding each
    /// channel to the nearest integer.
    pub fn tint(self, amount: f32) -> Color {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| {
            let c = c as f32;
            (c + (255.0 - c) * amount).round() as i32
        };
        Color::from_clamped(mix(self.r), mix(self.g), mix(self.b))
    }

    /// WCAG 2.0 relative luminance.
    pub fn relative_luminance(self) -> f32 {
        let linear: LinSrgb<f32> = Srgb::new(self.r, self.g, self.b)
            .into_format::<f32>()
            .into_linear();
        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn contrast_text(self) -> Color {
        if self.relative_luminance() > 0.4 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
