// SPDX-License-Identifier: MIT
//
// mpl-color — the color codec for mplcolors.
//
// Everything here is pure value arithmetic: parse a hex string into an
// RGB triple, convert between RGB and HSV, rotate hues, and derive the
// classic harmony schemes. No I/O, no tables, no terminal knowledge —
// those live in mpl-palette and mpl-render. This crate is the part of
// the system that must be testable with nothing but assertions.

pub mod color;
pub mod scheme;

pub use color::{Color, ColorError, Hsv};
pub use scheme::Scheme;
