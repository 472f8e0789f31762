//! Spacing values (padding, margin, gap)
//!
//! [§ 6.2 Padding](https://www.w3.org/TR/css-box-4/#paddings)
//! "Negative values for padding properties are invalid."

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{CalcExpression, Length, parse_number, shorthand};
use crate::context::ResolutionContext;
use crate::error::ValueError;

/// A pixel quantity that is never negative.
///
/// Every constructor clamps, whatever unit the value came from.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct Spacing(f64);

impl Spacing {
    /// No spacing.
    pub const ZERO: Self = Self(0.0);

    /// Spacing of `px` pixels, with negative values clamped to 0.
    #[must_use]
    pub fn new(px: f64) -> Self {
        // `max` also maps NaN to 0.
        Self(px.max(0.0))
    }

    /// The pixel value.
    #[must_use]
    pub const fn to_pixels(self) -> f64 {
        self.0
    }

    /// Parse one spacing value.
    ///
    /// Tries, in order: a calc() expression, a length, a bare number (px).
    /// Keywords such as `auto` are rejected.
    #[must_use]
    pub fn parse(s: &str, ctx: &ResolutionContext) -> Option<Self> {
        let s = s.trim();

        // STEP 1: calc(). An expression with the envelope but unsupported
        // content is rejected outright; it cannot be a length either.
        if let Some(expr) = CalcExpression::new(s) {
            return expr.evaluate(ctx).map(Self::new);
        }

        // STEP 2: <number><unit>
        if let Some(length) = Length::parse(s) {
            return Some(Self::new(length.to_pixels(ctx)));
        }

        // STEP 3: bare number, in pixels
        parse_number(s).map(Self::new)
    }

    /// Expand a 1 to 4 value box shorthand. See [`super::parse_shorthand`].
    #[must_use]
    pub fn parse_shorthand(s: &str, ctx: &ResolutionContext) -> Option<SpacingBox> {
        shorthand::parse_shorthand(s, ctx)
    }
}

impl From<f64> for Spacing {
    fn from(px: f64) -> Self {
        Self::new(px)
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl FromStr for Spacing {
    type Err = ValueError;

    /// Parses with [`ResolutionContext::DEFAULT`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &ResolutionContext::DEFAULT).ok_or_else(|| ValueError::Spacing(s.to_string()))
    }
}

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// The four sides of a margin or padding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SpacingBox {
    /// Top side.
    pub top: Spacing,
    /// Right side.
    pub right: Spacing,
    /// Bottom side.
    pub bottom: Spacing,
    /// Left side.
    pub left: Spacing,
}

impl SpacingBox {
    /// Sides in top, right, bottom, left order.
    #[must_use]
    pub const fn new(top: Spacing, right: Spacing, bottom: Spacing, left: Spacing) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same spacing on every side.
    #[must_use]
    pub const fn uniform(value: Spacing) -> Self {
        Self::new(value, value, value, value)
    }

    /// Same as [`Spacing::parse_shorthand`].
    #[must_use]
    pub fn parse(s: &str, ctx: &ResolutionContext) -> Option<Self> {
        shorthand::parse_shorthand(s, ctx)
    }

    /// Left plus right, in pixels.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left.to_pixels() + self.right.to_pixels()
    }

    /// Top plus bottom, in pixels.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top.to_pixels() + self.bottom.to_pixels()
    }
}

impl FromStr for SpacingBox {
    type Err = ValueError;

    /// Parses with [`ResolutionContext::DEFAULT`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &ResolutionContext::DEFAULT)
            .ok_or_else(|| ValueError::SpacingBox(s.to_string()))
    }
}
