// SPDX-License-Identifier: MIT
//
// Named color tables and lookup.

use std::cmp::Ordering;
use std::sync::OnceLock;

use mpl_color::{Color, ColorError};
use regex::Regex;
use thiserror::Error;

use crate::{css, xkcd};

/// One `(name, hex)` row of a color table.
pub type Entry = (&'static str, &'static str);

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Error for color lookups that can fail either way: as a name miss or
/// as a malformed hex string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The name is not in the table.
    #[error("unknown color name: {0:?}")]
    NotFound(String),
    /// The input looked like hex but didn't parse as hex.
    #[error(transparent)]
    InvalidFormat(#[from] ColorError),
}

// ─── ColorTable ──────────────────────────────────────────────────────────────

/// An ordered, read-only table of named colors.
///
/// The two built-in tables are [`ColorTable::css`] (the default set) and
/// [`ColorTable::extended`] (the community survey set). The table is the
/// injection point for the whole lookup layer — every operation is a
/// method, so tests run against a three-entry table instead of the
/// vendored data.
#[derive(Debug, Clone, Copy)]
pub struct ColorTable {
    name: &'static str,
    entries: &'static [Entry],
}

impl ColorTable {
    /// Build a table from a static entry slice. Entries keep the order
    /// they are given in — that order is the table's "natural order".
    #[must_use]
    pub const fn new(name: &'static str, entries: &'static [Entry]) -> Self {
        Self { name, entries }
    }

    /// The default table: the CSS/X11 named colors.
    #[must_use]
    pub const fn css() -> Self {
        Self::new("css", css::CSS_COLORS)
    }

    /// The extended table: a snapshot of the community color survey
    /// names, `xkcd:`-prefixed.
    #[must_use]
    pub const fn extended() -> Self {
        Self::new("xkcd", xkcd::XKCD_COLORS)
    }

    /// Table name, for log lines and headings.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// All entries in natural order.
    #[must_use]
    pub const fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ── Lookup ──────────────────────────────────────────────────────────

    /// Case-insensitive exact lookup. Returns the entry's hex string.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, hex)| hex)
    }

    /// Case-insensitive exact lookup, parsed to a [`Color`].
    ///
    /// # Errors
    ///
    /// [`LookupError::NotFound`] if the name is absent.
    pub fn color(&self, name: &str) -> Result<Color, LookupError> {
        let hex = self
            .get(name)
            .ok_or_else(|| LookupError::NotFound(name.to_owned()))?;
        Ok(Color::hex(hex)?)
    }

    /// Resolve a user-supplied color string: hex or name.
    ///
    /// A full hex-pattern match (3 or 6 hex digits, optional `#`) parses
    /// as hex. An input that merely *starts* like hex (leading `#` or
    /// digit) is an attempted hex and fails as such. Anything else is a
    /// name lookup.
    ///
    /// # Errors
    ///
    /// [`LookupError::InvalidFormat`] for malformed hex,
    /// [`LookupError::NotFound`] for unknown names.
    pub fn resolve(&self, input: &str) -> Result<Color, LookupError> {
        if hex_pattern().is_match(input) {
            return Ok(Color::hex(input)?);
        }
        if input.starts_with('#') || input.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Err(ColorError::InvalidFormat(input.to_owned()).into());
        }
        self.color(input)
    }

    // ── Search ──────────────────────────────────────────────────────────

    /// Case-insensitive substring search, in natural order.
    ///
    /// An empty result is not an error — it's just an empty vec.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Entry> {
        let query = query.to_ascii_lowercase();
        self.entries
            .iter()
            .filter(|(name, _)| name.to_ascii_lowercase().contains(&query))
            .copied()
            .collect()
    }

    /// Fuzzy suggestions for a query that found nothing: entries whose
    /// name scores above `0.5` bigram similarity, in natural order.
    #[must_use]
    pub fn nearest(&self, query: &str) -> Vec<Entry> {
        const LEAST_SCORE: f32 = 0.5;
        self.entries
            .iter()
            .filter(|(name, _)| similarity(query, name) > LEAST_SCORE)
            .copied()
            .collect()
    }

    // ── Ordering ────────────────────────────────────────────────────────

    /// Entries ordered by their HSV tuple — the order the full listing
    /// prints in, which groups similar hues together.
    #[must_use]
    pub fn sorted_by_hsv(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.entries.to_vec();
        entries.sort_by(|a, b| {
            hsv_key(a.1)
                .partial_cmp(&hsv_key(b.1))
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }
}

/// Sort key for [`ColorTable::sorted_by_hsv`]. Unparseable hex (a data
/// bug, not a user input) sorts first rather than panicking.
fn hsv_key(hex: &str) -> (f32, f32, f32) {
    Color::hex(hex).map_or((0.0, 0.0, 0.0), |c| {
        let hsv = c.to_hsv();
        (hsv.h, hsv.s, hsv.v)
    })
}

// ─── Hex Pattern ─────────────────────────────────────────────────────────────

static HEX_PATTERN: OnceLock<Regex> = OnceLock::new();

/// The full-match hex pattern used for hex/name disambiguation.
fn hex_pattern() -> &'static Regex {
    HEX_PATTERN.get_or_init(|| {
        Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex pattern compiles")
    })
}

// ─── Similarity ──────────────────────────────────────────────────────────────
//
// Bigram (Dice) similarity. Small and dependency-free — no crate in our
// stack covers fuzzy matching, and table names are short enough that the
// quadratic multiset intersection below is invisible.

/// Similarity ratio between two strings in `[0, 1]`, case-insensitive.
#[allow(clippy::cast_precision_loss)]
fn similarity(a: &str, b: &str) -> f32 {
    let a = a.to_ascii_lowercase();
    let b = b.to_ascii_lowercase();
    if a == b {
        return 1.0;
    }

    let ab = bigrams(&a);
    let mut bb = bigrams(&b);
    if ab.is_empty() || bb.is_empty() {
        return 0.0;
    }

    let total = ab.len() + bb.len();
    let mut matches = 0usize;
    for gram in ab {
        if let Some(idx) = bb.iter().position(|&g| g == gram) {
            bb.swap_remove(idx);
            matches += 1;
        }
    }

    (2 * matches) as f32 / total as f32
}

fn bigrams(s: &str) -> Vec<[char; 2]> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|w| [w[0], w[1]]).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
