//! Error type for the `FromStr` implementations.
//!
//! The parsing API itself returns `Option`: a `None` means "apply an
//! engine-level default". `ValueError` exists for callers that go through
//! `str::parse` and want to know which kind of value was rejected.

use thiserror::Error;

/// A style-value string that did not match the grammar of the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Not `<number><px|rem|em|vh|vw>`.
    #[error("invalid length '{0}'")]
    Length(String),
    /// Not `<number>%`.
    #[error("invalid percentage '{0}'")]
    Percentage(String),
    /// Not a calc expression, length, or bare number.
    #[error("invalid spacing '{0}'")]
    Spacing(String),
    /// A box shorthand with no tokens or with an invalid token.
    #[error("invalid spacing shorthand '{0}'")]
    SpacingBox(String),
    /// Not a keyword, calc expression, percentage, length, or bare number.
    #[error("invalid size '{0}'")]
    Size(String),
    /// Missing the `calc( … )` envelope.
    #[error("invalid calc expression '{0}'")]
    Calc(String),
    /// Not a hex, `rgb()`/`rgba()` or named color.
    #[error("invalid color '{0}'")]
    Color(String),
}
