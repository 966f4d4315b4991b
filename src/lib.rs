//! Pixel-accurate centering of styled text for the default game font.
//!
//! Widths come from a fixed, hand-measured table. Text is centered by
//! prepending plain spaces so its midpoint lands on the midpoint of the
//! server-list message area (154 px), the chat area (320 px), or any
//! custom width.

pub mod center;
pub mod error;
pub mod logging;
pub mod text;
pub mod width;

pub use center::{
    CenterSettings, Centerer, Region, UnknownGlyphPolicy, center_chat, center_for, center_motd,
    padding_count, text_width,
};
pub use error::{CenterError, Result};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink, NullSink,
};
pub use text::{StyledText, TextNode, TextRun, runs, styled_chars};
pub use width::{
    CHAT_WIDTH, FALLBACK_WIDTH, GlyphWidth, MOTD_WIDTH, char_width, glyph, unit_space_width,
};
