//! Per-character pixel width tables and word measurement.
//!
//! Writable-book UIs render a fixed bitmap font: every character has a known
//! pixel width and glyphs are separated by a 1-pixel gap. Row fitting only
//! needs the summed width of a word, so the table is a plain char map with a
//! default fallback; there is no shaping, kerning, or style dimension.

use std::collections::BTreeMap;

/// Fallback width in pixels for characters absent from the table.
pub const DEFAULT_GLYPH_PX: u32 = 5;

/// Width of the space glyph in the default book font.
pub const DEFAULT_SPACE_PX: u32 = 3;

/// Narrow/wide exceptions in the default book font. Newline carries width 0
/// so embedded row-break markers never contribute to row accounting.
const BOOK_FONT_OVERRIDES: &[(char, u32)] = &[
    (' ', 3),
    ('!', 1),
    ('"', 3),
    ('\'', 1),
    ('(', 3),
    (')', 3),
    ('*', 3),
    (',', 1),
    ('.', 1),
    (':', 1),
    (';', 1),
    ('<', 4),
    ('>', 4),
    ('@', 6),
    ('I', 3),
    ('[', 3),
    (']', 3),
    ('`', 2),
    ('f', 4),
    ('i', 1),
    ('k', 4),
    ('l', 2),
    ('t', 3),
    ('{', 3),
    ('|', 1),
    ('}', 3),
    ('~', 6),
    ('\n', 0),
];

/// Static per-character width lookup with a default fallback.
///
/// Lookup is exact char equality: `'I'` matches only uppercase `I`, and
/// lowercase `i` resolves through its own entry (or the default). Any
/// character is measurable; there are no error conditions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphMetrics {
    widths: BTreeMap<char, u32>,
    default_px: u32,
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_GLYPH_PX, BOOK_FONT_OVERRIDES.iter().copied())
    }
}

impl GlyphMetrics {
    /// Build a table from a default width and per-character overrides.
    pub fn new(default_px: u32, overrides: impl IntoIterator<Item = (char, u32)>) -> Self {
        Self {
            widths: overrides.into_iter().collect(),
            default_px,
        }
    }

    /// Width of a single glyph, excluding the inter-glyph gap.
    pub fn glyph_px(&self, ch: char) -> u32 {
        self.widths.get(&ch).copied().unwrap_or(self.default_px)
    }

    /// Width of the space glyph, used for inter-word gaps.
    ///
    /// Space never contributes to [`measure`](Self::measure); the layout
    /// engine adds it separately when a token carries a space separator.
    pub fn space_px(&self) -> u32 {
        self.widths.get(&' ').copied().unwrap_or(self.default_px)
    }

    /// Measure a raw word token in pixels.
    ///
    /// Literal spaces contribute nothing, not even a gap. Every other
    /// character adds its table width, plus a 1-pixel inter-glyph gap for
    /// each character that is not at the final index of the token. The gap
    /// is keyed on the raw token index, separators included: a trailing
    /// separator therefore grants the last glyph a gap that an unterminated
    /// token would not get. Row and page accounting are tuned against this
    /// exact behavior.
    pub fn measure(&self, token: &str) -> u32 {
        let count = token.chars().count();
        let last = count.saturating_sub(1);
        let mut width = 0u32;
        for (idx, ch) in token.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            width = width.saturating_add(self.glyph_px(ch));
            if idx != last {
                width = width.saturating_add(1);
            }
        }
        width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_book_font_widths() {
        let metrics = GlyphMetrics::default();
        assert_eq!(metrics.glyph_px('a'), 5);
        assert_eq!(metrics.glyph_px('i'), 1);
        assert_eq!(metrics.glyph_px('I'), 3);
        assert_eq!(metrics.glyph_px('\n'), 0);
        assert_eq!(metrics.space_px(), 3);
    }

    #[test]
    fn measure_adds_inter_glyph_gaps() {
        let metrics = GlyphMetrics::new(5, []);
        assert_eq!(metrics.measure("ab"), 11);
        assert_eq!(metrics.measure("a"), 5);
        assert_eq!(metrics.measure(""), 0);
    }

    #[test]
    fn trailing_separator_extends_the_final_gap() {
        let metrics = GlyphMetrics::new(5, []);
        // The space itself is skipped but shifts the final index, so 'b'
        // picks up a gap it would not get in the bare token.
        assert_eq!(metrics.measure("ab "), 12);
        assert_eq!(metrics.measure("ab\n"), 12);
    }

    #[test]
    fn separator_only_tokens_measure_zero_or_gap_free() {
        let metrics = GlyphMetrics::default();
        assert_eq!(metrics.measure(" "), 0);
        assert_eq!(metrics.measure("\n"), 0);
    }

    #[test]
    fn measure_is_case_sensitive_for_table_lookup() {
        // Pinned fixture: lookup is exact-char, never case-folded. With
        // default 5 and an override only for uppercase 'I', "Hi" is
        // H (5) + gap (1) + i (5), not 5 + 1 + 3.
        let metrics = GlyphMetrics::new(5, [('I', 3)]);
        assert_eq!(metrics.measure("Hi"), 11);
        assert_eq!(metrics.measure("HI"), 9);
    }
}
