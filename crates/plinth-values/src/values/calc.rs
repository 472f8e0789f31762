//! calc() expressions
//!
//! [§ 10.1 Basic Arithmetic: calc()](https://www.w3.org/TR/css-values-4/#calc-func)
//!
//! "The calc() function is a math function that allows basic arithmetic
//! to be performed on numerical values"
//!
//! Only a two-term sum or difference is accepted: `calc(<term> + <term>)` or
//! `calc(<term> - <term>)`, where `<term>` is a number with an optional
//! px/rem/em/vh/vw/% unit (no unit means px). Anything longer, nested, or
//! using `*` or `/` is rejected.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use strum_macros::{Display, EnumString};

use super::{LengthUnit, NUMBER_PATTERN, Percentage, anchored};
use crate::context::ResolutionContext;
use crate::error::ValueError;

const CALC_PREFIX: &str = "calc(";

/// `<number><unit>?`, capturing the number and the unit.
fn term_pattern() -> String {
    format!(r"({NUMBER_PATTERN})((?i:px|rem|em|vh|vw)|%)?")
}

static ADDITION_RE: Lazy<Regex> = Lazy::new(|| {
    let term = term_pattern();
    anchored(&format!(r"{term}\s*\+\s*{term}"))
});

static SUBTRACTION_RE: Lazy<Regex> = Lazy::new(|| {
    let term = term_pattern();
    anchored(&format!(r"{term}\s*-\s*{term}"))
});

/// `<integer>% - <number>px`
static PERCENTAGE_MINUS_PIXELS_RE: Lazy<Regex> =
    Lazy::new(|| anchored(r"(\d+)%\s*-\s*(\d*\.?\d+)(?i:px)"));

/// The unit of a calc() term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum CalcUnit {
    /// Pixels. Also the unit of a term written without one.
    #[strum(serialize = "px")]
    #[serde(rename = "px")]
    Px,
    /// Root font size.
    #[strum(serialize = "rem")]
    #[serde(rename = "rem")]
    Rem,
    /// Font size.
    #[strum(serialize = "em")]
    #[serde(rename = "em")]
    Em,
    /// 1% of viewport height.
    #[strum(serialize = "vh")]
    #[serde(rename = "vh")]
    Vh,
    /// 1% of viewport width.
    #[strum(serialize = "vw")]
    #[serde(rename = "vw")]
    Vw,
    /// A percentage. There is no percentage basis here, so it resolves to 0px.
    #[strum(serialize = "%")]
    #[serde(rename = "%")]
    Percent,
}

impl CalcUnit {
    /// The matching length unit, or `None` for a percentage.
    #[must_use]
    pub const fn length_unit(self) -> Option<LengthUnit> {
        match self {
            Self::Px => Some(LengthUnit::Px),
            Self::Rem => Some(LengthUnit::Rem),
            Self::Em => Some(LengthUnit::Em),
            Self::Vh => Some(LengthUnit::Vh),
            Self::Vw => Some(LengthUnit::Vw),
            Self::Percent => None,
        }
    }
}

/// One operand of a calc() expression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalcTerm {
    /// The numeric part.
    pub value: f64,
    /// The unit, px when the term was written without one.
    pub unit: CalcUnit,
}

impl CalcTerm {
    /// Resolve the term to pixels.
    ///
    /// Lengths convert exactly as [`super::Length::to_pixels`] does. A
    /// percentage term is always 0px.
    #[must_use]
    pub fn to_pixels(&self, ctx: &ResolutionContext) -> f64 {
        self.unit
            .length_unit()
            .map_or(0.0, |unit| unit.to_pixels(self.value, ctx))
    }

    fn from_captures(number: &str, unit: Option<&str>) -> Option<Self> {
        let value = number.parse().ok()?;
        let unit = match unit {
            Some(unit) => CalcUnit::from_str(unit).ok()?,
            None => CalcUnit::Px,
        };
        Some(Self { value, unit })
    }
}

impl fmt::Display for CalcTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// [§ 10.8 Syntax](https://www.w3.org/TR/css-values-4/#calc-syntax)
///
/// `*` and `/` are part of the type but never produced by
/// [`CalcExpression::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CalcOperator {
    /// `+`
    #[strum(serialize = "+")]
    Add,
    /// `-`
    #[strum(serialize = "-")]
    Subtract,
    /// `*`
    #[strum(serialize = "*")]
    Multiply,
    /// `/`
    #[strum(serialize = "/")]
    Divide,
}

/// A parsed `calc(<left> <operator> <right>)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalcOperation {
    /// Left operand.
    pub left: CalcTerm,
    /// Operator.
    pub operator: CalcOperator,
    /// Right operand.
    pub right: CalcTerm,
}

impl CalcOperation {
    /// Resolve both terms to pixels and combine them.
    ///
    /// Returns `None` for `*` and `/`, which are not supported.
    #[must_use]
    pub fn apply(&self, ctx: &ResolutionContext) -> Option<f64> {
        let left = self.left.to_pixels(ctx);
        let right = self.right.to_pixels(ctx);
        match self.operator {
            CalcOperator::Add => Some(left + right),
            CalcOperator::Subtract => Some(left - right),
            CalcOperator::Multiply | CalcOperator::Divide => None,
        }
    }
}

impl fmt::Display for CalcOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "calc({} {} {})", self.left, self.operator, self.right)
    }
}

/// A string known to have the `calc( … )` envelope.
///
/// Holding one does not mean the content is supported; see
/// [`CalcExpression::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CalcExpression(String);

impl CalcExpression {
    /// Whether the trimmed string starts with `calc(` and ends with `)`.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        let s = s.trim();
        s.len() > CALC_PREFIX.len() && s.starts_with(CALC_PREFIX) && s.ends_with(')')
    }

    /// Wrap `s` if it has the calc() envelope.
    #[must_use]
    pub fn new(s: &str) -> Option<Self> {
        Self::is_valid(s).then(|| Self(s.trim().to_string()))
    }

    /// The expression, including `calc(` and `)`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The text between `calc(` and the final `)`, trimmed.
    #[must_use]
    pub fn content(&self) -> &str {
        self.0
            .strip_prefix(CALC_PREFIX)
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or_default()
            .trim()
    }

    /// Parse the content as a sum, then as a difference.
    ///
    /// Returns `None` for more than two terms, nested calc(), or any other
    /// operator.
    #[must_use]
    pub fn parse(&self) -> Option<CalcOperation> {
        let content = self.content();
        let (caps, operator) = if let Some(caps) = ADDITION_RE.captures(content) {
            (caps, CalcOperator::Add)
        } else {
            (SUBTRACTION_RE.captures(content)?, CalcOperator::Subtract)
        };

        let left = CalcTerm::from_captures(&caps[1], caps.get(2).map(|m| m.as_str()))?;
        let right = CalcTerm::from_captures(&caps[3], caps.get(4).map(|m| m.as_str()))?;
        Some(CalcOperation {
            left,
            operator,
            right,
        })
    }

    /// Parse and evaluate to pixels.
    #[must_use]
    pub fn evaluate(&self, ctx: &ResolutionContext) -> Option<f64> {
        self.parse()?.apply(ctx)
    }

    /// Evaluate a raw string. Returns `None` without the calc() envelope.
    #[must_use]
    pub fn evaluate_str(s: &str, ctx: &ResolutionContext) -> Option<f64> {
        Self::new(s)?.evaluate(ctx)
    }

    /// Whether the content is exactly `<integer>% - <number>px`.
    ///
    /// This is a different rule from [`CalcExpression::evaluate`], which
    /// would resolve the percentage to 0px. [`super::Size::parse`] uses it
    /// to keep `calc(100% - 40px)` percentage-typed.
    #[must_use]
    pub fn is_percentage_minus_pixels(&self) -> bool {
        PERCENTAGE_MINUS_PIXELS_RE.is_match(self.content())
    }

    /// The percentage and pixel operands of a `<integer>% - <number>px`
    /// expression.
    #[must_use]
    pub fn percentage_minus_pixels(&self) -> Option<(Percentage, f64)> {
        let caps = PERCENTAGE_MINUS_PIXELS_RE.captures(self.content())?;
        let percentage = caps[1].parse().ok().map(Percentage::new)?;
        let pixels = caps[2].parse().ok()?;
        Some((percentage, pixels))
    }
}

impl fmt::Display for CalcExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CalcExpression {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or_else(|| ValueError::Calc(s.to_string()))
    }
}
