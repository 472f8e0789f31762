//! Style-value model for the Plinth converter.
//!
//! The markup-to-design-node mapping layer hands this crate isolated style
//! strings. This crate turns them into typed, computable values.
//!
//! # Scope
//!
//! - **Resolution context** ([`ResolutionContext`]) - viewport and font
//!   size for relative units, passed explicitly
//! - **Lengths** ([§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths))
//!   - `px`, `rem`, `em`, `vh`, `vw`
//!   - [`Percentage`], [`Spacing`], [`Size`]
//! - **calc()** ([§ 10.1 calc()](https://www.w3.org/TR/css-values-4/#calc-func))
//!   - Two terms joined by `+` or `-`
//! - **Box shorthands** ([§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties))
//!   - 1 to 4 value expansion, calc()-aware tokenization
//! - **Colors** ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!   - Hex, `rgb()`/`rgba()`, named colors
//!   - HSL conversion, lighten/darken, saturate/desaturate, grayscale,
//!     invert, mix
//!
//! # Not Implemented
//!
//! - `*` and `/` inside calc() (the operators exist in [`CalcOperator`]
//!   but no expression parses to them)
//! - Percentages inside calc() resolve to 0px; only the
//!   `calc(<int>% - <number>px)` shape is recognized, by [`Size::parse`]
//! - Cascade, inheritance and layout

/// Resolution context for relative units.
pub mod context;
/// Error type for `FromStr`.
pub mod error;
/// Value types and their parsers.
pub mod values;

pub use context::{
    DEFAULT_FONT_SIZE_PX, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, ResolutionContext,
};
pub use error::ValueError;
pub use values::{
    CalcExpression, CalcOperation, CalcOperator, CalcTerm, CalcUnit, DEFAULT_TOLERANCE, Hsl,
    Length, LengthUnit, Percentage, Pixels, Rgb, Rgba, Size, Spacing, SpacingBox,
    parse_shorthand, split_values,
};
