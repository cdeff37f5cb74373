// SPDX-License-Identifier: MIT
//
// mpl-render — terminal presentation for mplcolors.
//
// Everything here writes to an `impl Write` and returns `io::Result`, so
// the computational core never touches a real terminal: tests render into
// a `Vec<u8>` and assert on the bytes. The only terminal-specific
// assumption (true-color SGR support) is confined to the `ansi` module;
// the only process-global query (window size) to the `terminal` module.

pub mod ansi;
pub mod swatch;
pub mod terminal;

pub use swatch::{banner, colorbar, grid, stride, COLUMN_WIDTH, LABEL_WIDTH, SWATCH_WIDTH};
pub use terminal::Size;
