//! CSS Color values and parsing
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! Channels are stored normalized to [0, 1]. Byte space ([0, 255]) is only
//! used at the string boundary and in the [`Rgb::rgb`] / [`Rgba::rgba`]
//! constructors.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::{Hsl, NUMBER_PATTERN, anchored, named_colors};
use crate::error::ValueError;

/// Per-channel tolerance used by [`Rgb::equals`] callers that have no
/// better figure.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// [§ 5.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
///
/// Integer channels, with an optional alpha after a fourth comma.
static RGB_FUNCTION_RE: Lazy<Regex> = Lazy::new(|| {
    anchored(&format!(
        r"(?i:rgba?)\(\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*(?:,\s*({NUMBER_PATTERN})\s*)?\)"
    ))
});

/// Byte-space channel to [0, 1], clamping first.
fn normalize_byte(value: f64) -> f64 {
    // `clamp` would keep NaN; `max` maps it to 0 first.
    value.max(0.0).min(255.0) / 255.0
}

/// [0, 1] channel to the nearest byte.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn clamp_unit(value: f64) -> f64 {
    value.max(0.0).min(1.0)
}

/// Channels of an `rgb()`/`rgba()` string, each required to be in [0, 255],
/// plus the alpha if one was written.
fn parse_rgb_function(s: &str) -> Option<([u8; 3], Option<f64>)> {
    let caps = RGB_FUNCTION_RE.captures(s.trim())?;
    let channel = |index: usize| -> Option<u8> { caps[index].parse::<u8>().ok() };
    let channels = [channel(1)?, channel(2)?, channel(3)?];
    let alpha = match caps.get(4) {
        Some(m) => Some(m.as_str().parse::<f64>().ok()?),
        None => None,
    };
    Some((channels, alpha))
}

/// An opaque sRGB color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

impl Rgb {
    /// Black (#000000)
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// White (#ffffff)
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// A color from normalized channels, each clamped to [0, 1].
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
        }
    }

    /// A color from byte-space channels.
    ///
    /// Out-of-range channels are clamped to [0, 255], never rejected:
    /// `rgb(300, -10, 128)` is `rgb(255, 0, 128)`.
    #[must_use]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: normalize_byte(r),
            g: normalize_byte(g),
            b: normalize_byte(b),
        }
    }

    /// "the red color channel"
    #[must_use]
    pub const fn r(self) -> f64 {
        self.r
    }

    /// "the green color channel"
    #[must_use]
    pub const fn g(self) -> f64 {
        self.g
    }

    /// "the blue color channel"
    #[must_use]
    pub const fn b(self) -> f64 {
        self.b
    }

    /// Channels rounded to bytes.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Parse any supported notation.
    ///
    /// - `#…` → [`Rgb::from_hex`]
    /// - `rgb(…)` / `rgba(…)` → [`Rgb::from_rgb_string`]; a channel outside
    ///   [0, 255] fails the parse
    /// - anything else → [`Rgb::from_named`]
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }

        let lower = s.to_ascii_lowercase();
        if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
            return Self::from_rgb_string(s);
        }

        Self::from_named(s)
    }

    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// `#rgb` or `#rrggbb`, with or without the `#`, any case.
    ///
    /// "The three-digit RGB notation (#RGB) is converted into six-digit form
    /// (#RRGGBB) by replicating digits, not by adding zeros."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let expanded = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => return None,
        };

        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&expanded[range], 16).ok();
        let (r, g, b) = (byte(0..2)?, byte(2..4)?, byte(4..6)?);
        Some(Self::rgb(f64::from(r), f64::from(g), f64::from(b)))
    }

    /// `#rrggbb`, lowercase.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// [§ 5.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
    ///
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)` with integer channels in
    /// [0, 255]. The alpha is accepted and dropped.
    #[must_use]
    pub fn from_rgb_string(s: &str) -> Option<Self> {
        let ([r, g, b], _alpha) = parse_rgb_function(s)?;
        Some(Self::rgb(f64::from(r), f64::from(g), f64::from(b)))
    }

    /// `rgb(r, g, b)` with byte channels.
    #[must_use]
    pub fn to_rgb_string(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("rgb({r}, {g}, {b})")
    }

    /// `rgba(r, g, b, a)` with byte channels and `alpha` clamped to [0, 1].
    #[must_use]
    pub fn to_rgba_string(self, alpha: f64) -> String {
        Rgba::new(self, alpha).to_rgba_string()
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let [r, g, b] = named_colors::lookup(name.trim())?;
        Some(Self::rgb(f64::from(r), f64::from(g), f64::from(b)))
    }

    /// Convert to HSL, rounded to whole degrees and percents.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb(self)
    }

    /// Convert from HSL.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }

    /// Raise HSL lightness by `amount` percentage points.
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        let hsl = self.to_hsl();
        Hsl::new(hsl.h(), hsl.s(), hsl.l() + amount).to_rgb()
    }

    /// Lower HSL lightness by `amount` percentage points.
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.lighten(-amount)
    }

    /// Raise HSL saturation by `amount` percentage points.
    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        let hsl = self.to_hsl();
        Hsl::new(hsl.h(), hsl.s() + amount, hsl.l()).to_rgb()
    }

    /// Lower HSL saturation by `amount` percentage points.
    #[must_use]
    pub fn desaturate(self, amount: f64) -> Self {
        self.saturate(-amount)
    }

    /// Luma-weighted gray: 0.299 R + 0.587 G + 0.114 B on every channel.
    #[must_use]
    pub fn grayscale(self) -> Self {
        let gray = 0.114f64.mul_add(self.b, 0.299f64.mul_add(self.r, 0.587 * self.g));
        Self::new(gray, gray, gray)
    }

    /// `1 - channel` for each channel.
    #[must_use]
    pub fn invert(self) -> Self {
        Self::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b)
    }

    /// Linear interpolation towards `other`.
    ///
    /// `weight` is clamped to [0, 1]; 0 returns `self` and 1 returns `other`
    /// exactly.
    #[must_use]
    pub fn mix(self, other: Self, weight: f64) -> Self {
        let w = clamp_unit(weight);
        let lerp = |a: f64, b: f64| a * (1.0 - w) + b * w;
        Self::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }

    /// Whether every channel differs by at most `tolerance`.
    #[must_use]
    pub fn equals(self, other: Self, tolerance: f64) -> bool {
        (self.r - other.r).abs() <= tolerance
            && (self.g - other.g).abs() <= tolerance
            && (self.b - other.b).abs() <= tolerance
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValueError::Color(s.to_string()))
    }
}

/// An sRGB color with an alpha channel, all in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Rgba {
    /// An RGB color with alpha, clamped to [0, 1].
    #[must_use]
    pub fn new(rgb: Rgb, alpha: f64) -> Self {
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a: clamp_unit(alpha),
        }
    }

    /// Byte-space channels, clamped to [0, 255], and alpha clamped to [0, 1].
    #[must_use]
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(Rgb::rgb(r, g, b), a)
    }

    /// "the alpha channel" (0 = fully transparent, 1 = opaque)
    #[must_use]
    pub const fn a(self) -> f64 {
        self.a
    }

    /// Drop the alpha.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Parse any color notation, keeping an `rgba()` alpha.
    ///
    /// Hex and named colors are opaque.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_rgba_string(s).or_else(|| Rgb::parse(s).map(|rgb| Self::new(rgb, 1.0)))
    }

    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`. A missing alpha is 1.
    #[must_use]
    pub fn from_rgba_string(s: &str) -> Option<Self> {
        let ([r, g, b], alpha) = parse_rgb_function(s)?;
        Some(Self::rgba(
            f64::from(r),
            f64::from(g),
            f64::from(b),
            alpha.unwrap_or(1.0),
        ))
    }

    /// `rgba(r, g, b, a)` with byte channels.
    #[must_use]
    pub fn to_rgba_string(self) -> String {
        let [r, g, b] = self.rgb().to_bytes();
        format!("rgba({r}, {g}, {b}, {})", self.a)
    }

    /// Whether every channel, alpha included, differs by at most `tolerance`.
    #[must_use]
    pub fn equals(self, other: Self, tolerance: f64) -> bool {
        self.rgb().equals(other.rgb(), tolerance) && (self.a - other.a).abs() <= tolerance
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgba_string())
    }
}

impl FromStr for Rgba {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValueError::Color(s.to_string()))
    }
}
