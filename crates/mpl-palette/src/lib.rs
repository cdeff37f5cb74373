// SPDX-License-Identifier: MIT
//
// mpl-palette — the data layer of mplcolors.
//
// Two kinds of read-only datasets live here: named color tables (the CSS
// names and the extended community survey names) and colormap anchor
// tables (viridis family, ColorBrewer families). On top of them sit the
// lookup operations: exact name lookup, substring search, fuzzy
// suggestions, and hex-or-name resolution.
//
// The tables are vendored snapshots — fixed, versioned, never mutated at
// runtime. Everything that consumes them goes through [`ColorTable`] or
// [`Colormap`], so tests can substitute a tiny table of their own.

pub mod colormap;
mod css;
pub mod table;
mod xkcd;

pub use colormap::{Colormap, ColormapGroup};
pub use table::{ColorTable, LookupError};
