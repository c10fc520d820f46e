//! Character pattern table and the text → grid converter.
//!
//! Every glyph is a 5×7 dot-matrix bitmap stored one byte per row, with bit 4
//! as the leftmost column.  Text is laid out left to right with a single blank
//! column between neighbouring characters.

use std::fmt;

/// Rows in every glyph (and therefore in every non-empty grid).
pub const GLYPH_HEIGHT: usize = 7;
/// Columns in every glyph.
pub const GLYPH_WIDTH: usize = 5;
/// Blank columns inserted between two characters.
pub const GLYPH_SPACING: usize = 1;

type Bitmap = [u8; GLYPH_HEIGHT];

// ── Glyph table ─────────────────────────────────────────────────────────────

const GLYPHS: &[(char, Bitmap)] = &[
    ('A', [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('B', [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E]),
    ('C', [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E]),
    ('D', [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C]),
    ('E', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F]),
    ('F', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10]),
    ('G', [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F]),
    ('H', [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('I', [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E]),
    ('J', [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C]),
    ('K', [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11]),
    ('L', [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F]),
    ('M', [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11]),
    ('N', [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11]),
    ('O', [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('P', [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10]),
    ('Q', [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D]),
    ('R', [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11]),
    ('S', [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E]),
    ('T', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04]),
    ('U', [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('V', [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04]),
    ('W', [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A]),
    ('X', [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11]),
    ('Y', [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04]),
    ('Z', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F]),
    ('0', [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E]),
    ('1', [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E]),
    ('2', [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F]),
    ('3', [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E]),
    ('4', [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02]),
    ('5', [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E]),
    ('6', [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E]),
    ('7', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08]),
    ('8', [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E]),
    ('9', [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C]),
    (' ', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('!', [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04]),
    ('?', [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C]),
    (',', [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08]),
    ('-', [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00]),
    ('+', [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00]),
    (':', [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00]),
    ('\'', [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00]),
    ('"', [0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('/', [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00]),
    ('(', [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02]),
    (')', [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08]),
    ('#', [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A]),
    ('&', [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D]),
    ('=', [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00]),
    ('_', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F]),
    ('*', [0x00, 0x04, 0x15, 0x0E, 0x15, 0x04, 0x00]),
    ('@', [0x0E, 0x11, 0x01, 0x0D, 0x15, 0x15, 0x0E]),
];

/// Glyph drawn for characters the table has no bitmap for.
pub const FALLBACK_GLYPH: char = '?';

/// Look up the bitmap for `ch`.  Lowercase ASCII letters share the uppercase
/// glyph.
pub fn glyph(ch: char) -> Option<&'static Bitmap> {
    let ch = ch.to_ascii_uppercase();
    GLYPHS.iter().find(|(c, _)| *c == ch).map(|(_, bits)| bits)
}

/// Every character the table can draw, in table order.
pub fn supported_chars() -> impl Iterator<Item = char> {
    GLYPHS.iter().map(|(c, _)| *c)
}

// ── Grid ────────────────────────────────────────────────────────────────────

/// Rectangular matrix of binary cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    /// The empty grid (no rows, no columns).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid from explicit rows.  Callers are trusted to pass rows of
    /// equal length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row, or 0 for the empty grid.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (`row`, `col`); out-of-range cells read as inactive.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Number of active cells.
    pub fn lit_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| **c).count()
    }

    /// Render as plain text, one line per row.
    pub fn to_text(&self, on: char, off: char) -> String {
        let mut out = String::with_capacity(self.height() * (self.width() + 1));
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|&c| if c { on } else { off }));
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text('█', '·'))
    }
}

// ── Converter ───────────────────────────────────────────────────────────────

/// Turn text into a dot-matrix grid.  Implementations must be total and
/// deterministic.
pub trait TextToGrid {
    fn to_grid(&self, text: &str) -> Grid;
}

impl<F> TextToGrid for F
where
    F: Fn(&str) -> Grid,
{
    fn to_grid(&self, text: &str) -> Grid {
        self(text)
    }
}

/// The built-in 5×7 pixel font.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelFont;

impl TextToGrid for PixelFont {
    fn to_grid(&self, text: &str) -> Grid {
        text_to_grid(text)
    }
}

/// Lay `text` out with the built-in font.
///
/// Empty text gives the empty grid; anything else gives exactly
/// [`GLYPH_HEIGHT`] rows.
pub fn text_to_grid(text: &str) -> Grid {
    let count = text.chars().count();
    if count == 0 {
        return Grid::empty();
    }

    let width = count * GLYPH_WIDTH + (count - 1) * GLYPH_SPACING;
    let mut rows = vec![Vec::with_capacity(width); GLYPH_HEIGHT];

    for (i, ch) in text.chars().enumerate() {
        let bits = glyph(ch)
            .or_else(|| glyph(FALLBACK_GLYPH))
            .copied()
            .unwrap_or_default();
        for (row, line) in rows.iter_mut().enumerate() {
            if i > 0 {
                line.extend(std::iter::repeat_n(false, GLYPH_SPACING));
            }
            for col in 0..GLYPH_WIDTH {
                line.push(bits[row] & (1 << (GLYPH_WIDTH - 1 - col)) != 0);
            }
        }
    }

    Grid::from_rows(rows)
}
