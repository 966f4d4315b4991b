//! Pixel widths for the default game font.
//!
//! The table itself lives in `table`; `utils` holds the text cleanup applied
//! before anything is measured.

mod table;
mod utils;

pub use table::{
    CHAT_WIDTH, FALLBACK_WIDTH, GLYPH_TABLE, GlyphWidth, MOTD_WIDTH, SPACE, bold_width,
    char_width, fallback_width, glyph, glyphs, unit_space_width,
};
pub use utils::strip_markup;
