// SPDX-License-Identifier: MIT
//
// Swatch, grid, banner, and colorbar layout.
//
// The layout constants come from the tool's fixed visual grammar: a
// 6-cell color block, a 31-cell listing column, a 17-cell colorbar
// label. Terminal width only decides how many columns fit and how
// coarsely colorbars are sampled.

use std::io::{self, Write};

use mpl_color::Color;
use unicode_width::UnicodeWidthStr;

use crate::ansi;

/// Width of one listing column in cells (swatch + name + gap).
pub const COLUMN_WIDTH: usize = 31;

/// Width of the color block at the start of each entry.
pub const SWATCH_WIDTH: usize = 6;

/// Width of the right-aligned name column in colorbar rows.
pub const LABEL_WIDTH: usize = 17;

// ─── Swatches ────────────────────────────────────────────────────────────────

/// Print one labeled swatch: a colored block, a space, and the label
/// padded out to `pad_to` display cells (0 to skip padding).
pub fn swatch(w: &mut impl Write, label: &str, color: Color, pad_to: usize) -> io::Result<()> {
    ansi::bg(w, color)?;
    write!(w, "{:width$}", "", width = SWATCH_WIDTH)?;
    ansi::reset(w)?;
    write!(w, " {label}")?;

    let used = SWATCH_WIDTH + 1 + label.width();
    for _ in used..pad_to {
        w.write_all(b" ")?;
    }
    Ok(())
}

/// Print labeled swatches in a row-major grid sized to the terminal.
///
/// Entries flow left to right, `cols / 31` per row (at least one), in
/// the order given — ordering is the caller's concern.
pub fn grid(w: &mut impl Write, entries: &[(&str, Color)], cols: u16) -> io::Result<()> {
    let per_row = (cols as usize / COLUMN_WIDTH).max(1);

    for (i, &(label, color)) in entries.iter().enumerate() {
        let last_in_row = i % per_row == per_row - 1 || i == entries.len() - 1;
        swatch(w, label, color, if last_in_row { 0 } else { COLUMN_WIDTH })?;
        if last_in_row {
            writeln!(w)?;
        }
    }
    Ok(())
}

// ─── Banners ─────────────────────────────────────────────────────────────────

/// Print the three-line `= message =` decoration, centered to `cols`,
/// followed by a blank line.
pub fn banner(w: &mut impl Write, message: &str, cols: u16) -> io::Result<()> {
    let message = format!(" = {message} = ");
    let line = "=".repeat(message.width() + 1);

    writeln!(w, "{}", centered(&line, cols as usize))?;
    writeln!(w, "{}", centered(&message, cols as usize))?;
    writeln!(w, "{}", centered(&line, cols as usize))?;
    writeln!(w)
}

/// Left-pad a string so it sits centered in `width` display cells.
fn centered(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        return s.to_owned();
    }
    let pad = (width - w) / 2;
    format!("{:pad$}{s}", "", pad = pad)
}

// ─── Colorbars ───────────────────────────────────────────────────────────────

/// Sampling stride for colorbars: every nth of 256 gradient steps,
/// coarser on narrow terminals so a bar always fits on one line.
#[must_use]
pub const fn stride(cols: u16) -> usize {
    if cols > 136 {
        2
    } else if cols > 91 {
        3
    } else if cols > 69 {
        4
    } else if cols > 55 {
        5
    } else {
        8
    }
}

/// Print one colorbar row: the right-aligned label and one background
/// cell per sample, followed by a blank line.
pub fn colorbar(w: &mut impl Write, label: &str, samples: &[Color]) -> io::Result<()> {
    write!(w, "{label:>width$} ", width = LABEL_WIDTH)?;
    for &color in samples {
        ansi::bg(w, color)?;
        w.write_all(b" ")?;
    }
    ansi::reset(w)?;
    writeln!(w)?;
    writeln!(w)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Swatch ──────────────────────────────────────────────────────────

    #[test]
    fn swatch_emits_block_and_label() {
        let s = render(|w| swatch(w, "teal", Color::rgb(2, 147, 134), 0));
        assert_eq!(s, "\x1b[48;2;2;147;134m      \x1b[0m teal");
    }

    #[test]
    fn swatch_pads_to_column_width() {
        let s = render(|w| swatch(w, "teal", Color::rgb(2, 147, 134), COLUMN_WIDTH));
        // 6 block cells + 1 space + 4 label chars + padding = 31 cells.
        let visible: String = strip_sgr(&s);
        assert_eq!(visible.len(), COLUMN_WIDTH);
    }

    #[test]
    fn swatch_never_truncates_long_labels() {
        let long = "a-name-much-longer-than-the-column";
        let s = render(|w| swatch(w, long, Color::rgb(0, 0, 0), COLUMN_WIDTH));
        assert!(s.contains(long));
    }

    // ── Grid ────────────────────────────────────────────────────────────

    #[test]
    fn grid_wraps_by_terminal_width() {
        let entries: Vec<(&str, Color)> =
            vec![("a", Color::default()); 5];
        // 80 cols → 2 columns per row → rows of 2, 2, 1.
        let s = render(|w| grid(w, &entries, 80));
        assert_eq!(s.lines().count(), 3);
    }

    #[test]
    fn grid_single_column_on_narrow_terminal() {
        let entries: Vec<(&str, Color)> =
            vec![("a", Color::default()); 3];
        let s = render(|w| grid(w, &entries, 20));
        assert_eq!(s.lines().count(), 3);
    }

    #[test]
    fn grid_ends_with_newline() {
        let entries = vec![("one", Color::default()), ("two", Color::default())];
        let s = render(|w| grid(w, &entries, 200));
        assert!(s.ends_with('\n'));
    }

    // ── Banner ──────────────────────────────────────────────────────────

    #[test]
    fn banner_shape() {
        let s = render(|w| banner(w, "RESULT", 40));
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].trim() == " = RESULT =".trim());
        assert!(lines[0].trim().chars().all(|c| c == '='));
        assert_eq!(lines[0].trim(), lines[2].trim());
        assert!(lines[3].is_empty());
    }

    #[test]
    fn banner_is_centered() {
        let s = render(|w| banner(w, "RESULT", 40));
        let first = s.lines().next().unwrap();
        let content = first.trim_start();
        let pad = first.len() - content.len();
        // " = RESULT = " is 12 wide, rule is 13; (40 - 13) / 2 = 13.
        assert_eq!(pad, 13);
    }

    #[test]
    fn banner_wider_than_terminal_is_not_padded() {
        let s = render(|w| banner(w, "a very long banner message indeed", 10));
        assert!(s.lines().next().unwrap().starts_with('='));
    }

    // ── Stride ──────────────────────────────────────────────────────────

    #[test]
    fn stride_thresholds() {
        assert_eq!(stride(40), 8);
        assert_eq!(stride(55), 8);
        assert_eq!(stride(56), 5);
        assert_eq!(stride(69), 5);
        assert_eq!(stride(70), 4);
        assert_eq!(stride(91), 4);
        assert_eq!(stride(92), 3);
        assert_eq!(stride(136), 3);
        assert_eq!(stride(137), 2);
    }

    // ── Colorbar ────────────────────────────────────────────────────────

    #[test]
    fn colorbar_label_is_right_aligned() {
        let s = render(|w| colorbar(w, "viridis", &[]));
        assert!(s.starts_with("          viridis "));
    }

    #[test]
    fn colorbar_one_cell_per_sample() {
        let samples = vec![Color::default(); 32];
        let s = render(|w| colorbar(w, "x", &samples));
        assert_eq!(s.matches("\x1b[48;2;").count(), 32);
    }

    #[test]
    fn colorbar_resets_and_leaves_blank_line() {
        let s = render(|w| colorbar(w, "x", &[Color::rgb(1, 2, 3)]));
        assert!(s.contains("\x1b[0m"));
        assert!(s.ends_with("\n\n"));
    }

    // ── Helpers ─────────────────────────────────────────────────────────

    /// Strip SGR escape sequences, keeping printable content.
    fn strip_sgr(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for e in chars.by_ref() {
                    if e == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}
