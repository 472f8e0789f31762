//! CSS Value types and parsing
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/)

mod calc;
mod color;
mod hsl;
mod length;
mod named_colors;
mod percentage;
mod shorthand;
mod size;
mod spacing;

pub use calc::{CalcExpression, CalcOperation, CalcOperator, CalcTerm, CalcUnit};
pub use color::{DEFAULT_TOLERANCE, Rgb, Rgba};
pub use hsl::Hsl;
pub use length::{Length, LengthUnit};
pub use percentage::Percentage;
pub use shorthand::{parse_shorthand, split_values};
pub use size::{Pixels, Size};
pub use spacing::{Spacing, SpacingBox};

use once_cell::sync::Lazy;
use regex::Regex;

/// [§ 4.3 Real Numbers](https://www.w3.org/TR/css-values-4/#numbers)
///
/// "A number is either an integer, or zero or more decimal digits followed
/// by a dot (.) followed by one or more decimal digits".
///
/// Exponents are not accepted.
pub(crate) const NUMBER_PATTERN: &str = r"[+-]?(?:\d+(?:\.\d*)?|\.\d+)";

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| anchored(NUMBER_PATTERN));

/// Compile `^pattern$`.
///
/// Only called with patterns built from constants in this module tree.
pub(crate) fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$")).expect("value grammar patterns are valid regexes")
}

/// Parse a bare numeric literal. Rejects `inf`, `NaN` and exponents, which
/// `f64::from_str` would otherwise accept.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    if NUMBER_RE.is_match(s) {
        s.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("10"), Some(10.0));
        assert_eq!(parse_number("-2.5"), Some(-2.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("+3"), Some(3.0));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e3"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("10px"), None);
    }
}
