//! HSL colors
//!
//! [§ 7 HSL Colors](https://www.w3.org/TR/css-color-4/#the-hsl-notation)

use std::fmt;

use serde::Serialize;

use super::Rgb;

/// A color as hue, saturation and lightness.
///
/// Values produced by [`Rgb::to_hsl`] are rounded to whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

impl Hsl {
    /// An HSL color. Hue wraps into [0, 360); saturation and lightness are
    /// clamped to [0, 100].
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Hue angle in degrees, in [0, 360).
    #[must_use]
    pub const fn h(self) -> f64 {
        self.h
    }

    /// Saturation in percent, in [0, 100].
    #[must_use]
    pub const fn s(self) -> f64 {
        self.s
    }

    /// Lightness in percent, in [0, 100].
    #[must_use]
    pub const fn l(self) -> f64 {
        self.l
    }

    /// [§ 7.1 Converting HSL Colors to sRGB](https://www.w3.org/TR/css-color-4/#hsl-to-rgb)
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let l = self.l.clamp(0.0, 100.0) / 100.0;

        // Achromatic: every channel is the lightness.
        if s == 0.0 {
            return Rgb::new(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }

    /// [§ 7.2 Converting sRGB Colors to HSL](https://www.w3.org/TR/css-color-4/#rgb-to-hsl)
    ///
    /// Hue comes from whichever channel is largest. All three components are
    /// rounded to the nearest integer.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let s = if l > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            let h = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (h * 60.0, s)
        };

        Self {
            h: h.round().rem_euclid(360.0),
            s: (s * 100.0).round().clamp(0.0, 100.0),
            l: (l * 100.0).round().clamp(0.0, 100.0),
        }
    }
}

/// One RGB channel from the HSL intermediates `p` and `q` and a hue
/// offset `t` in turns.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}
