use std::collections::HashMap;
use std::sync::LazyLock;

/// Width of the server-list message area, in pixels.
pub const MOTD_WIDTH: u32 = 154;
/// Width of the chat area, in pixels.
pub const CHAT_WIDTH: u32 = 320;
/// Width substituted for characters missing from the table.
pub const FALLBACK_WIDTH: u32 = 4;

/// The space glyph. Bolding never widens it.
pub const SPACE: GlyphWidth = GlyphWidth::new(' ', 3);

/// One measured glyph of the default font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphWidth {
    pub character: char,
    pub width: u32,
}

impl GlyphWidth {
    pub const fn new(character: char, width: u32) -> Self {
        Self { character, width }
    }
}

/// Hand-measured widths for the default font, regular weight.
pub static GLYPH_TABLE: &[GlyphWidth] = &[
    GlyphWidth::new('A', 5),
    GlyphWidth::new('a', 5),
    GlyphWidth::new('B', 5),
    GlyphWidth::new('b', 5),
    GlyphWidth::new('C', 5),
    GlyphWidth::new('c', 5),
    GlyphWidth::new('D', 5),
    GlyphWidth::new('d', 5),
    GlyphWidth::new('E', 5),
    GlyphWidth::new('e', 5),
    GlyphWidth::new('F', 5),
    GlyphWidth::new('f', 4),
    GlyphWidth::new('G', 5),
    GlyphWidth::new('g', 5),
    GlyphWidth::new('H', 5),
    GlyphWidth::new('h', 5),
    GlyphWidth::new('I', 3),
    GlyphWidth::new('i', 1),
    GlyphWidth::new('J', 5),
    GlyphWidth::new('j', 5),
    GlyphWidth::new('K', 5),
    GlyphWidth::new('k', 4),
    GlyphWidth::new('L', 5),
    GlyphWidth::new('l', 1),
    GlyphWidth::new('M', 5),
    GlyphWidth::new('m', 5),
    GlyphWidth::new('N', 5),
    GlyphWidth::new('n', 5),
    GlyphWidth::new('O', 5),
    GlyphWidth::new('o', 5),
    GlyphWidth::new('P', 5),
    GlyphWidth::new('p', 5),
    GlyphWidth::new('Q', 5),
    GlyphWidth::new('q', 5),
    GlyphWidth::new('R', 5),
    GlyphWidth::new('r', 5),
    GlyphWidth::new('S', 5),
    GlyphWidth::new('s', 5),
    GlyphWidth::new('T', 5),
    GlyphWidth::new('t', 4),
    GlyphWidth::new('U', 5),
    GlyphWidth::new('u', 5),
    GlyphWidth::new('V', 5),
    GlyphWidth::new('v', 5),
    GlyphWidth::new('W', 5),
    GlyphWidth::new('w', 5),
    GlyphWidth::new('X', 5),
    GlyphWidth::new('x', 5),
    GlyphWidth::new('Y', 5),
    GlyphWidth::new('y', 5),
    GlyphWidth::new('Z', 5),
    GlyphWidth::new('z', 5),
    GlyphWidth::new('1', 5),
    GlyphWidth::new('2', 5),
    GlyphWidth::new('3', 5),
    GlyphWidth::new('4', 5),
    GlyphWidth::new('5', 5),
    GlyphWidth::new('6', 5),
    GlyphWidth::new('7', 5),
    GlyphWidth::new('8', 5),
    GlyphWidth::new('9', 5),
    GlyphWidth::new('0', 5),
    GlyphWidth::new('!', 1),
    GlyphWidth::new('@', 6),
    GlyphWidth::new('#', 5),
    GlyphWidth::new('$', 5),
    GlyphWidth::new('%', 5),
    GlyphWidth::new('^', 5),
    GlyphWidth::new('&', 5),
    GlyphWidth::new('*', 5),
    GlyphWidth::new('(', 4),
    GlyphWidth::new(')', 4),
    GlyphWidth::new('-', 5),
    GlyphWidth::new('_', 5),
    GlyphWidth::new('+', 5),
    GlyphWidth::new('=', 5),
    GlyphWidth::new('{', 4),
    GlyphWidth::new('}', 4),
    GlyphWidth::new('[', 3),
    GlyphWidth::new(']', 3),
    GlyphWidth::new(':', 1),
    GlyphWidth::new(';', 1),
    GlyphWidth::new('"', 3),
    GlyphWidth::new('\'', 1),
    GlyphWidth::new('<', 4),
    GlyphWidth::new('>', 4),
    GlyphWidth::new('?', 5),
    GlyphWidth::new('/', 5),
    GlyphWidth::new('\\', 5),
    GlyphWidth::new('|', 1),
    GlyphWidth::new('~', 5),
    GlyphWidth::new('`', 2),
    GlyphWidth::new('.', 1),
    GlyphWidth::new(',', 1),
    SPACE,
];

static INDEX: LazyLock<HashMap<char, u32>> = LazyLock::new(|| {
    GLYPH_TABLE
        .iter()
        .map(|glyph| (glyph.character, glyph.width))
        .collect()
});

/// Find the table row for `character`.
pub fn glyph(character: char) -> Option<GlyphWidth> {
    INDEX
        .get(&character)
        .map(|&width| GlyphWidth::new(character, width))
}

pub fn glyphs() -> impl Iterator<Item = GlyphWidth> {
    GLYPH_TABLE.iter().copied()
}

/// Width of `glyph` when rendered bold.
pub fn bold_width(glyph: GlyphWidth) -> u32 {
    if glyph.character == SPACE.character {
        glyph.width
    } else {
        glyph.width + 1
    }
}

/// Pixel width of a single character, or `None` when the table has no entry.
pub fn char_width(character: char, bold: bool) -> Option<u32> {
    let glyph = glyph(character)?;
    Some(if bold { bold_width(glyph) } else { glyph.width })
}

pub fn fallback_width(bold: bool) -> u32 {
    if bold { FALLBACK_WIDTH + 1 } else { FALLBACK_WIDTH }
}

/// Advance of one padding space: the space glyph plus its one pixel gap.
pub fn unit_space_width() -> u32 {
    SPACE.width + 1
}
