//! 24-bit RGB values and the input boundary that produces them.
//!
//! ## Usage
//!
//! Parse seed and custom colors from hex strings or integers before they reach
//! the palette engine.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ThemeError;

/// An opaque 24-bit sRGB color (`0xRRGGBB`).
///
/// The inner value never exceeds `0xFFFFFF`; every constructor validates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb(u32);

impl Rgb {
    /// Largest representable value.
    pub const MAX: u32 = 0x00FF_FFFF;
    /// Pure black.
    pub const BLACK: Rgb = Rgb(0x000000);
    /// Pure white.
    pub const WHITE: Rgb = Rgb(0xFFFFFF);

    /// Creates a color from a `0xRRGGBB` integer, rejecting anything outside
    /// `[0, 0xFFFFFF]`.
    pub fn from_int(value: i64) -> Result<Self, ThemeError> {
        if value < 0 {
            return Err(ThemeError::invalid_color(
                value.to_string(),
                "negative values are not colors",
            ));
        }
        if value > i64::from(Self::MAX) {
            return Err(ThemeError::invalid_color(
                format!("{value:#x}"),
                "value does not fit in 24-bit RGB",
            ));
        }
        Ok(Self(value as u32))
    }

    /// Creates a color from its three channels.
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(input: &str) -> Result<Self, ThemeError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ThemeError::invalid_color(input, "empty hex string"));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ThemeError::invalid_color(input, "non-hex character"));
        }
        match digits.len() {
            3 => {
                let mut value = 0u32;
                for c in digits.chars() {
                    // Checked above.
                    let nibble = c.to_digit(16).unwrap_or_default();
                    value = (value << 8) | (nibble << 4) | nibble;
                }
                Ok(Self(value))
            }
            6 => u32::from_str_radix(digits, 16)
                .map(Self)
                .map_err(|_| ThemeError::invalid_color(input, "non-hex character")),
            8 => Err(ThemeError::invalid_color(
                input,
                "alpha channels are not supported",
            )),
            _ => Err(ThemeError::invalid_color(
                input,
                "expected 3 or 6 hex digits",
            )),
        }
    }

    /// Drops the alpha byte of an engine `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb & Self::MAX)
    }

    /// Returns the opaque `0xFFRRGGBB` form used by the palette engine.
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | self.0
    }

    /// Returns the raw `0xRRGGBB` value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Unvalidated color input, either an integer or a hex string.
///
/// [`ColorInput::resolve`] is the only way to turn it into an [`Rgb`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// `0xRRGGBB` integer, possibly out of range.
    Int(i64),
    /// Hex string such as `#006494`.
    Hex(String),
}

impl ColorInput {
    /// Validates the input.
    pub fn resolve(&self) -> Result<Rgb, ThemeError> {
        match self {
            Self::Int(value) => Rgb::from_int(*value),
            Self::Hex(hex) => Rgb::from_hex(hex),
        }
    }
}

impl fmt::Display for ColorInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Hex(hex) => f.write_str(hex),
        }
    }
}

impl From<i64> for ColorInput {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ColorInput {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ColorInput {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Hex(value.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Hex(value)
    }
}

impl From<Rgb> for ColorInput {
    fn from(value: Rgb) -> Self {
        Self::Int(i64::from(value.value()))
    }
}
