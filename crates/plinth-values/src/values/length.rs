//! CSS Length values and parsing
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

use super::{NUMBER_PATTERN, anchored};
use crate::context::ResolutionContext;
use crate::error::ValueError;

/// The length units Plinth understands.
///
/// Unit suffixes are ASCII case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px,
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of font-size on the root element."
    Rem,
    /// "Equal to the computed value of the font-size property of the element"
    ///
    /// NOTE: resolved against the same base font size as `rem`. There is no
    /// element tree here to provide a parent font size.
    Em,
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vh = 1% of viewport height"
    Vh,
    /// "1vw = 1% of viewport width"
    Vw,
}

impl LengthUnit {
    /// Whether the unit needs a [`ResolutionContext`] to become pixels.
    #[must_use]
    pub const fn is_relative(self) -> bool {
        !matches!(self, Self::Px)
    }

    /// Convert `value` in this unit to pixels.
    #[must_use]
    pub fn to_pixels(self, value: f64, ctx: &ResolutionContext) -> f64 {
        match self {
            Self::Px => value,
            // rem and em both use the context font size.
            Self::Rem | Self::Em => value * ctx.font_size,
            Self::Vh => value * ctx.viewport_height / 100.0,
            Self::Vw => value * ctx.viewport_width / 100.0,
        }
    }
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in the
/// property definitions."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

static LENGTH_RE: Lazy<Regex> =
    Lazy::new(|| anchored(&format!(r"({NUMBER_PATTERN})([a-zA-Z]+)")));

impl Length {
    /// A length in the given unit.
    #[must_use]
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// A pixel length.
    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    /// The numeric part.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The unit part.
    #[must_use]
    pub const fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Whether converting this length needs a [`ResolutionContext`].
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        self.unit.is_relative()
    }

    /// Parse `<number><unit>`.
    ///
    /// Returns `None` for keywords, percentages, bare numbers and units
    /// other than px/rem/em/vh/vw.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let caps = LENGTH_RE.captures(s.trim())?;
        let value: f64 = caps[1].parse().ok()?;
        let unit = LengthUnit::from_str(&caps[2]).ok()?;
        Some(Self::new(value, unit))
    }

    /// Resolve to pixels.
    #[must_use]
    pub fn to_pixels(&self, ctx: &ResolutionContext) -> f64 {
        self.unit.to_pixels(self.value, ctx)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl FromStr for Length {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValueError::Length(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_case_insensitive() {
        assert_eq!(Length::parse("10PX"), Some(Length::px(10.0)));
        assert_eq!(
            Length::parse("2Rem"),
            Some(Length::new(2.0, LengthUnit::Rem))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::new(1.5, LengthUnit::Rem).to_string(), "1.5rem");
        assert_eq!(Length::px(10.0).to_string(), "10px");
    }
}
