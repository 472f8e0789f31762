//! CSS Percentage values
//!
//! [§ 4.7 Percentages](https://www.w3.org/TR/css-values-4/#percentages)

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::{NUMBER_PATTERN, anchored};
use crate::error::ValueError;

/// "A `<percentage>` value is denoted by `<percentage>`, and consists of a
/// `<number>` immediately followed by a percent sign '%'."
///
/// Never negative. Values above 100 are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Percentage(f64);

static PERCENTAGE_RE: Lazy<Regex> = Lazy::new(|| anchored(&format!(r"({NUMBER_PATTERN})%")));

impl Percentage {
    /// A percentage, with negative values clamped to 0.
    #[must_use]
    pub fn new(value: f64) -> Self {
        // `max` also maps NaN to 0.
        Self(value.max(0.0))
    }

    /// The value, in percent (50% is `50.0`).
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// The value as a fraction (50% is `0.5`).
    #[must_use]
    pub fn to_decimal(self) -> f64 {
        self.0 / 100.0
    }

    /// Resolve against the size of the parent dimension.
    #[must_use]
    pub fn to_pixels(self, parent_size: f64) -> f64 {
        self.0 * parent_size / 100.0
    }

    /// Parse `<number>%`. The trailing `%` is required.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let caps = PERCENTAGE_RE.captures(s.trim())?;
        caps[1].parse().ok().map(Self::new)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for Percentage {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValueError::Percentage(s.to_string()))
    }
}
