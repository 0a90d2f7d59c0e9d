use palette::{FromColor, Hsl, IntoColor, Srgb};

use crate::error::ExportError;

/// Core color type used throughout the exporter.
/// Wraps sRGB u8 components plus alpha and provides HSL conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Marker for a color that could not be read. Serializes as `#000000`.
    pub const INVALID: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self, ExportError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ExportError::InvalidColor(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ExportError::InvalidColor(hex.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Parse a KConfig color entry: `r,g,b`, `r,g,b,a` or `#rrggbb`.
    pub fn from_kconfig(value: &str) -> Result<Self, ExportError> {
        let value = value.trim();
        if value.starts_with('#') {
            return Self::from_hex(value);
        }

        let parts = value
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ExportError::InvalidColor(value.to_string()))?;
        match parts.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            [r, g, b, a] => Ok(Self::with_alpha(*r, *g, *b, *a)),
            _ => Err(ExportError::InvalidColor(value.to_string())),
        }
    }

    /// Serialize to lowercase hex `#rrggbb`. Alpha is not emitted.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear per-channel blend: `self * (1 - ratio) + other * ratio`.
    ///
    /// `ratio` is clamped to [0, 1]; a NaN ratio yields `self`.
    pub fn mix(self, other: Color, ratio: f32) -> Color {
        if ratio.is_nan() {
            return self;
        }
        let t = ratio.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
        Color {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }

    /// Convert to HSL. Hue in degrees, saturation and lightness in [0, 1].
    pub fn to_hsl(self) -> Hsl {
        let srgb: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        srgb.into_color()
    }

    /// Create an opaque color from HSL (hue in degrees, saturation and
    /// lightness in [0, 1]).
    pub fn from_hsl(hsl: Hsl) -> Self {
        let srgb: Srgb<f32> = Srgb::from_color(hsl);
        Self::from_srgb_f32_clamped(srgb)
    }

    /// HSL hue in degrees, normalized to [0, 360).
    pub fn hsl_hue(self) -> f32 {
        self.to_hsl().hue.into_positive_degrees()
    }

    pub fn hsl_saturation(self) -> f32 {
        self.to_hsl().saturation
    }

    /// Clamp an Srgb<f32> to [0, 1] and convert to Color.
    fn from_srgb_f32_clamped(srgb: Srgb<f32>) -> Self {
        let r = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(r, g, b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
