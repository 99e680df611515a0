//! Hex color parsing and `rgba(...)` formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid color format: {0:?} (expected 6 hex digits, optionally prefixed with '#')")]
    InvalidColorFormat(String),
}

/// An opaque RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Format as a CSS `rgba(R,G,B,O)` color.
    ///
    /// The opacity is written as given, using the shortest decimal that
    /// round-trips (`0.2` stays `0.2`, `1.0` becomes `1`).
    pub fn to_rgba(&self, opacity: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, opacity)
    }
}

/// Parse a 6-digit hex color (`#rrggbb` or `rrggbb`, case-insensitive).
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    // `from_str_radix` alone would accept a leading sign, so check every byte.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColorFormat(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Combine a hex color and an opacity fraction into an `rgba(...)` string.
pub fn to_rgba(hex: &str, opacity: f64) -> Result<String, ColorError> {
    Ok(hex_to_rgb(hex)?.to_rgba(opacity))
}

/// A validated 6-digit hex color.
///
/// Displays and serializes as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Rgb);

impl HexColor {
    pub const fn new(rgb: Rgb) -> Self {
        Self(rgb)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Rgb::new(r, g, b))
    }

    pub const fn black() -> Self {
        Self(Rgb::black())
    }

    pub const fn white() -> Self {
        Self(Rgb::white())
    }

    pub const fn rgb(&self) -> Rgb {
        self.0
    }

    pub fn to_rgba(&self, opacity: f64) -> String {
        self.0.to_rgba(opacity)
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s.trim()).map(Self)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}
