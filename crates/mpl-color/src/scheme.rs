// SPDX-License-Identifier: MIT
//
// Color harmony schemes — complement, triad, tetrad, split complement.
//
// Every scheme is a fixed set of hue offsets applied to the base color in
// HSV space. The base's saturation and value carry through unchanged, so
// a muted base yields a muted scheme.

use crate::color::Color;

/// A color harmony scheme: a fixed set of hue rotations from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// The opposite point on the color wheel (180°).
    Complement,
    /// Three colors spaced evenly around the wheel (120°, 240°).
    Triad,
    /// Four colors at right angles (90°, 180°, 270°).
    Tetrad,
    /// The two colors flanking the complement (150°, 210°).
    SplitComplement,
}

impl Scheme {
    /// Hue offsets of the derived colors, in ascending order. The base
    /// color (offset 0°) is not listed; [`Scheme::apply`] prepends it.
    #[must_use]
    pub const fn offsets(self) -> &'static [f32] {
        match self {
            Self::Complement => &[180.0],
            Self::Triad => &[120.0, 240.0],
            Self::Tetrad => &[90.0, 180.0, 270.0],
            Self::SplitComplement => &[150.0, 210.0],
        }
    }

    /// Human-readable scheme name for headings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complement => "Complement",
            Self::Triad => "Triad",
            Self::Tetrad => "Tetrad",
            Self::SplitComplement => "Split complement",
        }
    }

    /// Derive the scheme from a base color.
    ///
    /// Returns the base first (unmodified — not round-tripped through
    /// HSV), then the derived colors in ascending offset order, all
    /// sharing the base's saturation and value.
    #[must_use]
    pub fn apply(self, base: Color) -> Vec<Color> {
        let hsv = base.to_hsv();
        let mut out = Vec::with_capacity(self.offsets().len() + 1);
        out.push(base);
        for &degrees in self.offsets() {
            out.push(hsv.shift_hue(degrees).to_rgb());
        }
        out
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
