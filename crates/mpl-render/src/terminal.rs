// SPDX-License-Identifier: MIT
//
// Terminal queries — window size.
//
// Safety: this module necessarily uses `unsafe` for ioctl (TIOCGWINSZ).
// That is the standard POSIX interface for the window-size query — there
// is no safe alternative. The unsafe block is minimal.
#![allow(unsafe_code)]

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

impl Size {
    /// The fallback size used when stdout is not a terminal.
    pub const DEFAULT: Self = Self { cols: 80, rows: 24 };
}

/// Query the current terminal size via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

/// Terminal size, falling back to 80×24 off-tty (piped output, CI).
#[must_use]
pub fn size_or_default() -> Size {
    get_size().unwrap_or(Size::DEFAULT)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_is_80_by_24() {
        assert_eq!(Size::DEFAULT, Size { cols: 80, rows: 24 });
    }

    #[test]
    fn size_or_default_never_returns_zero() {
        let size = size_or_default();
        assert!(size.cols > 0);
        assert!(size.rows > 0);
    }
}
