//! Two-stop continuous color scale.

use std::fmt;
use std::str::FromStr;

use crate::error::{GrowflowError, Result};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GrowflowError::InvalidColorScale(format!(
                "expected #rrggbb, got '{}'",
                hex
            )));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Rgb(r, g, b)),
            _ => Err(GrowflowError::InvalidColorScale(format!(
                "expected #rrggbb, got '{}'",
                hex
            ))),
        }
    }
}

impl FromStr for Rgb {
    type Err = GrowflowError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Linear gradient between two colors over a numeric domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    from: Rgb,
    to: Rgb,
    min: f64,
    max: f64,
}

impl Default for ColorScale {
    /// Light to saturated blue over `[0, 500]` mm.
    fn default() -> Self {
        Self {
            from: Rgb(0xe3, 0xf2, 0xfd),
            to: Rgb(0x21, 0x96, 0xf3),
            min: 0.0,
            max: 500.0,
        }
    }
}

impl ColorScale {
    /// Create a scale; the domain must be finite with `min < max`.
    pub fn new(from: Rgb, to: Rgb, domain: (f64, f64)) -> Result<Self> {
        let (min, max) = domain;
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(GrowflowError::InvalidColorScale(format!(
                "domain [{}, {}] must be finite and increasing",
                min, max
            )));
        }
        Ok(Self { from, to, min, max })
    }

    /// First stop color.
    pub fn from(&self) -> Rgb {
        self.from
    }

    /// Second stop color.
    pub fn to(&self) -> Rgb {
        self.to
    }

    /// Numeric domain as `(min, max)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Position of `value` in the domain, clamped to `[0, 1]`.
    ///
    /// Returns `None` for absent (`NaN`) values. Infinities clamp to the
    /// nearest end of the domain like any other out-of-range value.
    pub fn position(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        Some(((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0))
    }

    /// Color for `value`, `None` for absent values.
    pub fn color(&self, value: f64) -> Option<Rgb> {
        self.position(value).map(|t| self.color_at(t))
    }

    /// Color at a normalized position in `[0, 1]`.
    pub fn color_at(&self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + t * (b as f64 - a as f64)).round() as u8;
        Rgb(
            lerp(self.from.0, self.to.0),
            lerp(self.from.1, self.to.1),
            lerp(self.from.2, self.to.2),
        )
    }

    /// RGBA bytes for `value`: opaque scale color, or fully transparent
    /// black for absent values.
    pub fn rgba(&self, value: f64) -> [u8; 4] {
        match self.color(value) {
            Some(Rgb(r, g, b)) => [r, g, b, 255],
            None => [0, 0, 0, 0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let c = Rgb::from_hex("#2196f3").unwrap();
        assert_eq!(c, Rgb(0x21, 0x96, 0xf3));
        assert_eq!(c.to_string(), "#2196f3");
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_midpoint_rounds() {
        let scale = ColorScale::new(Rgb(0, 0, 0), Rgb(255, 255, 255), (0.0, 10.0)).unwrap();
        assert_eq!(scale.color(5.0), Some(Rgb(128, 128, 128)));
    }

    #[test]
    fn test_empty_domain_rejected() {
        assert!(ColorScale::new(Rgb(0, 0, 0), Rgb(1, 1, 1), (5.0, 5.0)).is_err());
    }
}
