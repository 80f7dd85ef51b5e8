//! Colour representations and conversion functions.
//!
//! Provides the canonical [`Rgb`] type plus derived [`Hsl`], [`Xyz`] and
//! [`Chromaticity`] forms. All conversions are pure functions over `f64`.
//!
//! The XYZ transform is the fixed matrix used by the dichromat simulation,
//! not the standard sRGB/D65 matrix. Hue in [`Hsl`] is stored as a fraction
//! of a full turn in [0, 1).

use crate::error::ColourError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB colour with channels nominally in [0, 1].
///
/// Serializes as an uppercase hex string `"#RRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Cylindrical HSL. `h` is a fraction of a turn in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Tristimulus values in the simulation's XYZ-like space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Normalized (u, v) chromaticity: `u = X / (X+Y+Z)`, `v = Y / (X+Y+Z)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    pub u: f64,
    pub v: f64,
}

/// Numeric range of raw channel values handed in at a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRange {
    /// Channels in [0, 1].
    Unit,
    /// Channels in [0, 255].
    Byte,
}

impl InputRange {
    /// Guesses the range of a raw triple: any channel above 1 means 0–255.
    pub fn infer(r: f64, g: f64, b: f64) -> Self {
        if r > 1.0 || g > 1.0 || b > 1.0 {
            InputRange::Byte
        } else {
            InputRange::Unit
        }
    }

    fn divisor(self) -> f64 {
        match self {
            InputRange::Unit => 1.0,
            InputRange::Byte => 255.0,
        }
    }
}

impl Rgb {
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from raw channels in the given range, rescaling to [0, 1].
    ///
    /// Returns `ColourError::InvalidColourFormat` if any channel is not finite.
    pub fn from_channels(r: f64, g: f64, b: f64, range: InputRange) -> Result<Rgb, ColourError> {
        if !(r.is_finite() && g.is_finite() && b.is_finite()) {
            return Err(ColourError::InvalidColourFormat(format!(
                "non-finite channel in ({r}, {g}, {b})"
            )));
        }
        let d = range.divisor();
        Ok(Rgb::new(r / d, g / d, b / d))
    }

    /// Applies `f` to each channel.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Rgb {
        Rgb::new(f(self.r), f(self.g), f(self.b))
    }

    /// Linear interpolation towards `other`: `(1 - t) * self + t * other`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        Rgb::new(
            (1.0 - t) * self.r + t * other.r,
            (1.0 - t) * self.g + t * other.g,
            (1.0 - t) * self.b + t * other.b,
        )
    }

    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    pub fn from_hex(hex: &str) -> Result<Rgb, ColourError> {
        hex_to_rgb(hex)
    }

    /// Formats as a CSS `rgb(r, g, b)` function with 0–255 channels.
    pub fn to_css(self) -> String {
        format!(
            "rgb({:.0}, {:.0}, {:.0})",
            self.r * 255.0,
            self.g * 255.0,
            self.b * 255.0
        )
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex_to_rgb(&s).map_err(serde::de::Error::custom)
    }
}

impl Hsl {
    pub fn hue_degrees(self) -> f64 {
        self.h * 360.0
    }
}

/// A colour in one of the two encodings accepted from callers.
///
/// Numeric operations never see the hex form: call [`Colour::decode`] first.
#[derive(Debug, Clone, PartialEq)]
pub enum Colour {
    Hex(String),
    Linear(Rgb),
}

impl Colour {
    pub fn decode(&self) -> Result<Rgb, ColourError> {
        match self {
            Colour::Hex(hex) => hex_to_rgb(hex),
            Colour::Linear(rgb) => Ok(*rgb),
        }
    }
}

impl From<Rgb> for Colour {
    fn from(rgb: Rgb) -> Self {
        Colour::Linear(rgb)
    }
}

impl From<&str> for Colour {
    fn from(hex: &str) -> Self {
        Colour::Hex(hex.to_string())
    }
}

impl From<String> for Colour {
    fn from(hex: String) -> Self {
        Colour::Hex(hex)
    }
}

/// A colour with its XYZ and chromaticity computed once from RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourSample {
    pub rgb: Rgb,
    pub xyz: Xyz,
    pub chromaticity: Chromaticity,
}

impl ColourSample {
    pub fn new(rgb: Rgb) -> Self {
        let xyz = rgb_to_xyz(rgb);
        Self {
            rgb,
            xyz,
            chromaticity: xyz_to_chromaticity(xyz),
        }
    }
}

/// Encodes a colour as `"#RRGGBB"` (uppercase).
///
/// Channels are scaled by 255 and rounded. No clamping is applied: a channel
/// outside [0, 1] produces a malformed string rather than a corrected one.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let byte = |c: f64| (c * 255.0).round() as i64;
    format!(
        "#{:02X}{:02X}{:02X}",
        byte(rgb.r),
        byte(rgb.g),
        byte(rgb.b)
    )
}

/// Parses `"#RRGGBB"` or `"RRGGBB"` (case insensitive).
///
/// Returns `ColourError::InvalidColourFormat` for anything that is not six hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColourError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColourError::InvalidColourFormat(format!(
            "expected 6 hex digits, got \"{hex}\""
        )));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[2 * i..2 * i + 2], 16)
            .map(|v| v as f64 / 255.0)
            .map_err(|e| ColourError::InvalidColourFormat(format!("\"{hex}\": {e}")))
    };
    Ok(Rgb::new(channel(0)?, channel(1)?, channel(2)?))
}

/// Converts RGB to HSL.
///
/// When several channels share the maximum, red wins over green and green
/// over blue. Zero chroma gives hue 0; lightness 0 or 1 gives saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let l = (max + min) / 2.0;

    let mut h = if chroma == 0.0 {
        0.0
    } else if max == r {
        60.0 * (g - b) / chroma
    } else if max == g {
        60.0 * (2.0 + (b - r) / chroma)
    } else {
        60.0 * (4.0 + (r - g) / chroma)
    };
    if h < 0.0 {
        h += 360.0;
    }

    let s = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (max - l) / l.min(1.0 - l)
    };

    Hsl { h: h / 360.0, s, l }
}

/// Converts HSL back to RGB. Hue is wrapped into [0, 1) first.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { s, l, .. } = hsl;
    let h = hsl.h.rem_euclid(1.0);
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h * 6.0;
    let x = chroma * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match (h_prime as usize).min(5) {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    Rgb::new(r + m, g + m, b + m)
}

/// Converts RGB to the simulation's XYZ-like space.
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let Rgb { r, g, b } = rgb;
    Xyz {
        x: 0.430574 * r + 0.341550 * g + 0.178325 * b,
        y: 0.222015 * r + 0.706655 * g + 0.071330 * b,
        z: 0.020183 * r + 0.129553 * g + 0.939180 * b,
    }
}

/// Inverse of [`rgb_to_xyz`].
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let Xyz { x, y, z } = xyz;
    Rgb {
        r: 3.063218 * x - 1.393325 * y - 0.475802 * z,
        g: -0.969243 * x + 1.875966 * y + 0.041555 * z,
        b: 0.067871 * x - 0.228834 * y + 1.069251 * z,
    }
}

/// Projects XYZ onto (u, v) chromaticity. Black maps to (0, 0).
pub fn xyz_to_chromaticity(xyz: Xyz) -> Chromaticity {
    let sum = xyz.x + xyz.y + xyz.z;
    if sum == 0.0 {
        Chromaticity { u: 0.0, v: 0.0 }
    } else {
        Chromaticity {
            u: xyz.x / sum,
            v: xyz.y / sum,
        }
    }
}
