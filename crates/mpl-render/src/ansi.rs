// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No
// state, no layout decisions — that's the swatch module's job. This
// module just knows the byte-level encoding of the three SGR commands
// the tool needs: true-color foreground, true-color background, reset.
//
// All functions return `io::Result` propagated from the underlying
// writer. In practice they never fail when writing to a `Vec<u8>`.

use std::io::{self, Write};

use mpl_color::Color;

/// Set the foreground (text) color using 24-bit `TrueColor` SGR.
#[inline]
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Set the background color using 24-bit `TrueColor` SGR.
#[inline]
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: run an ANSI function and return its output as a string.
    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn fg_rgb() {
        assert_eq!(
            emit(|w| fg(w, Color::rgb(255, 128, 0))),
            "\x1b[38;2;255;128;0m"
        );
    }

    #[test]
    fn fg_black() {
        assert_eq!(emit(|w| fg(w, Color::rgb(0, 0, 0))), "\x1b[38;2;0;0;0m");
    }

    #[test]
    fn bg_rgb() {
        assert_eq!(
            emit(|w| bg(w, Color::rgb(0, 100, 200))),
            "\x1b[48;2;0;100;200m"
        );
    }

    #[test]
    fn reset_sequence() {
        assert_eq!(emit(|w| reset(w)), "\x1b[0m");
    }

    #[test]
    fn multiple_sequences_compose() {
        let mut buf = Vec::new();
        bg(&mut buf, Color::rgb(18, 171, 132)).unwrap();
        fg(&mut buf, Color::rgb(255, 255, 255)).unwrap();
        reset(&mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "\x1b[48;2;18;171;132m\x1b[38;2;255;255;255m\x1b[0m");
    }
}
