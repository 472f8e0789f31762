//! Resolution context for relative units
//!
//! [§ 5.1 Relative Lengths](https://www.w3.org/TR/css-values-4/#relative-lengths)
//! "Relative length units specify a length relative to another length."
//!
//! Plinth never reads viewport or font metrics from ambient state. Every
//! relative-unit conversion receives a [`ResolutionContext`] explicitly.

use serde::Serialize;

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1920.0;

/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 1080.0;

/// User agent default font size.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
/// "Initial: medium" - medium is 16px per common browser convention.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// The quantities a relative unit is resolved against.
///
/// All three fields are positive and finite. The builder methods replace
/// anything else with the matching default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionContext {
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    pub viewport_width: f64,
    /// "1vh = 1% of viewport height"
    pub viewport_height: f64,
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// Used for both `em` and `rem`.
    pub font_size: f64,
}

impl ResolutionContext {
    /// 1920 × 1080 viewport, 16px font.
    pub const DEFAULT: Self = Self {
        viewport_width: DEFAULT_VIEWPORT_WIDTH,
        viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        font_size: DEFAULT_FONT_SIZE_PX,
    };

    /// Build a context from explicit values.
    #[must_use]
    pub fn new(viewport_width: f64, viewport_height: f64, font_size: f64) -> Self {
        Self::DEFAULT
            .with_viewport(viewport_width, viewport_height)
            .with_font_size(font_size)
    }

    /// Copy of this context with a different viewport.
    #[must_use]
    pub fn with_viewport(self, width: f64, height: f64) -> Self {
        Self {
            viewport_width: positive_or(width, DEFAULT_VIEWPORT_WIDTH),
            viewport_height: positive_or(height, DEFAULT_VIEWPORT_HEIGHT),
            ..self
        }
    }

    /// Copy of this context with a different base font size.
    #[must_use]
    pub fn with_font_size(self, font_size: f64) -> Self {
        Self {
            font_size: positive_or(font_size, DEFAULT_FONT_SIZE_PX),
            ..self
        }
    }
}

impl Default for ResolutionContext {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = ResolutionContext::default();
        assert_eq!(ctx.viewport_width, 1920.0);
        assert_eq!(ctx.viewport_height, 1080.0);
        assert_eq!(ctx.font_size, 16.0);
    }

    #[test]
    fn test_builder_rejects_non_positive() {
        let ctx = ResolutionContext::new(0.0, -5.0, f64::NAN);
        assert_eq!(ctx, ResolutionContext::DEFAULT);

        let ctx = ResolutionContext::DEFAULT.with_font_size(20.0);
        assert_eq!(ctx.font_size, 20.0);
        assert_eq!(ctx.viewport_width, 1920.0);
    }
}
