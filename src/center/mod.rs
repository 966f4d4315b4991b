//! Measuring and centering styled text against a pixel-wide region.

mod core;
mod settings;

pub use self::core::{Centerer, center_chat, center_for, center_motd, padding_count, text_width};
pub use settings::{CenterSettings, Region, UnknownGlyphPolicy};
