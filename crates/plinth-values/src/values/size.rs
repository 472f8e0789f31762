//! Size values (width, height and friends)
//!
//! [§ 3.1 Sizing Properties](https://www.w3.org/TR/css-sizing-3/#sizing-properties)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{CalcExpression, Length, Percentage, parse_number};
use crate::context::ResolutionContext;
use crate::error::ValueError;

/// A resolved pixel count.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Pixels(pub f64);

impl Pixels {
    /// The pixel value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Pixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// A size as the mapping layer consumes it.
///
/// Relative lengths are resolved to pixels while parsing. Only percentages
/// stay relative, because their basis (the parent) is not known yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Size {
    /// An absolute size.
    Pixels(Pixels),
    /// A fraction of the parent size.
    Percentage(Percentage),
    /// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
    /// "allows the user agent to compute the value based on other properties."
    Auto,
    /// [§ 7.3.1 Resetting a Property](https://www.w3.org/TR/css-cascade-4/#inherit)
    /// "the property's computed value is the computed value of the parent"
    Inherit,
    /// [§ 7.3.1 Resetting a Property](https://www.w3.org/TR/css-cascade-4/#initial)
    /// "the property's initial value"
    Initial,
}

impl Size {
    /// Parse a size.
    ///
    /// Accepts, in order:
    /// 1. `auto`, `inherit`, `initial` (exact spelling)
    /// 2. calc(). `calc(<int>% - <number>px)` becomes the percentage
    ///    operand and the pixel operand is dropped, so `calc(50% - 10px)`
    ///    is `50%` and `calc(100% - 40px)` is `100%`. Other expressions
    ///    are evaluated to pixels.
    /// 3. `<number>%`
    /// 4. `<number><px|rem|em|vh|vw>`, resolved to pixels
    /// 5. a bare number, in pixels
    #[must_use]
    pub fn parse(s: &str, ctx: &ResolutionContext) -> Option<Self> {
        let s = s.trim();

        // STEP 1: keywords
        match s {
            "auto" => return Some(Self::Auto),
            "inherit" => return Some(Self::Inherit),
            "initial" => return Some(Self::Initial),
            _ => {}
        }

        // STEP 2: calc()
        if let Some(expr) = CalcExpression::new(s) {
            if let Some((percentage, _)) = expr.percentage_minus_pixels() {
                return Some(Self::Percentage(percentage));
            }
            return expr.evaluate(ctx).map(|px| Self::Pixels(Pixels(px)));
        }

        // STEP 3: percentage
        if let Some(percentage) = Percentage::parse(s) {
            return Some(Self::Percentage(percentage));
        }

        // STEP 4: length, resolved now
        if let Some(length) = Length::parse(s) {
            return Some(Self::Pixels(Pixels(length.to_pixels(ctx))));
        }

        // STEP 5: bare number
        parse_number(s).map(|px| Self::Pixels(Pixels(px)))
    }

    /// Whether this is `auto`, `inherit` or `initial`.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self, Self::Auto | Self::Inherit | Self::Initial)
    }

    /// Resolve to pixels against the parent size.
    ///
    /// Keywords have no pixel value here; the caller applies its default.
    #[must_use]
    pub fn to_pixels(&self, parent_size: f64) -> Option<f64> {
        match self {
            Self::Pixels(px) => Some(px.value()),
            Self::Percentage(percentage) => Some(percentage.to_pixels(parent_size)),
            Self::Auto | Self::Inherit | Self::Initial => None,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => fmt::Display::fmt(px, f),
            Self::Percentage(percentage) => fmt::Display::fmt(percentage, f),
            Self::Auto => f.write_str("auto"),
            Self::Inherit => f.write_str("inherit"),
            Self::Initial => f.write_str("initial"),
        }
    }
}

impl FromStr for Size {
    type Err = ValueError;

    /// Parses with [`ResolutionContext::DEFAULT`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &ResolutionContext::DEFAULT).ok_or_else(|| ValueError::Size(s.to_string()))
    }
}
