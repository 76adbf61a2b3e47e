//! Map colours
//!
//! Colours travel as CSS strings (`#RRGGBB` or `rgba(r, g, b, a)`) so map
//! layers can use them directly.

use crate::error::{AdvisoryError, AdvisoryResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA colour with 8-bit channels and fractional alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`
    pub a: f32,
}

impl Rgba {
    /// Fully transparent
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    /// Create a colour
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba::new(r, g, b, 1.0)
    }

    /// Same colour with a different opacity
    pub const fn with_alpha(self, a: f32) -> Self {
        Rgba::new(self.r, self.g, self.b, a)
    }

    /// `#RRGGBB`, dropping alpha
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgba::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    fn parse_css_rgba(s: &str) -> Option<Self> {
        let inner = s.strip_prefix("rgba(")?.strip_suffix(')')?;
        let mut parts = inner.split(',').map(str::trim);
        let r = parts.next()?.parse().ok()?;
        let g = parts.next()?.parse().ok()?;
        let b = parts.next()?.parse().ok()?;
        let a: f32 = parts.next()?.parse().ok()?;
        if parts.next().is_some() || !(0.0..=1.0).contains(&a) {
            return None;
        }
        Some(Rgba::new(r, g, b, a))
    }
}

impl FromStr for Rgba {
    type Err = AdvisoryError;

    fn from_str(s: &str) -> AdvisoryResult<Self> {
        let trimmed = s.trim();
        Self::parse_hex(trimmed)
            .or_else(|| Self::parse_css_rgba(trimmed))
            .ok_or_else(|| AdvisoryError::InvalidColour(s.to_string()))
    }
}

impl TryFrom<String> for Rgba {
    type Error = AdvisoryError;

    fn try_from(s: String) -> AdvisoryResult<Self> {
        s.parse()
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> String {
        c.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.a - 1.0).abs() < f32::EPSILON {
            f.write_str(&self.to_hex())
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}
