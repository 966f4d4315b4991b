use serde_json::{Value, json};

use crate::error::{CenterError, Result};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::text::{StyledText, runs};
use crate::width::{CHAT_WIDTH, MOTD_WIDTH, char_width, fallback_width, unit_space_width};

use super::settings::{CenterSettings, Region, UnknownGlyphPolicy};

/// Number of leading spaces that centers text `total` pixels wide within
/// `target` pixels.
///
/// This is the smallest `k` with `k * unit_space_width() >= target - total / 2`,
/// and zero once the text is at least twice as wide as the target.
pub fn padding_count(total: u32, target: u32) -> usize {
    let threshold = target.saturating_sub(total / 2);
    threshold.div_ceil(unit_space_width()) as usize
}

/// Total pixel width of a styled text tree.
///
/// Characters missing from the width table are measured as the fallback
/// glyph. Use a [`Centerer`] to pick a different policy.
pub fn text_width<T: StyledText>(tree: &T) -> u32 {
    runs(tree)
        .iter()
        .flat_map(|run| {
            run.text.chars().map(move |c| {
                char_width(c, run.bold).unwrap_or_else(|| fallback_width(run.bold))
            })
        })
        .sum()
}

/// Left-pad `tree` so it appears centered within `width` pixels.
pub fn center_for<T: StyledText>(tree: T, width: u32) -> T {
    let padding = padding_count(text_width(&tree), width);
    T::compose(" ".repeat(padding), tree)
}

pub fn center_motd<T: StyledText>(tree: T) -> T {
    center_for(tree, MOTD_WIDTH)
}

pub fn center_chat<T: StyledText>(tree: T) -> T {
    center_for(tree, CHAT_WIDTH)
}

/// Configurable measuring and centering, with optional structured logging.
#[derive(Clone, Default)]
pub struct Centerer {
    settings: CenterSettings,
    logger: Option<Logger>,
}

impl Centerer {
    pub fn new(settings: CenterSettings) -> Self {
        Self {
            settings,
            logger: None,
        }
    }

    pub fn with_default() -> Self {
        Self::new(CenterSettings::default())
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn settings(&self) -> &CenterSettings {
        &self.settings
    }

    /// Total pixel width of `tree` under the configured unknown-glyph policy.
    pub fn text_width<T: StyledText>(&self, tree: &T) -> Result<u32> {
        let mut total = 0u32;
        let mut position = 0usize;
        for run in runs(tree) {
            for c in run.text.chars() {
                total += self.glyph_width(c, run.bold, position)?;
                position += 1;
            }
        }
        Ok(total)
    }

    pub fn padding_for<T: StyledText>(&self, tree: &T, target: u32) -> Result<usize> {
        Ok(padding_count(self.text_width(tree)?, target))
    }

    pub fn center<T: StyledText>(&self, tree: T, target: u32) -> Result<T> {
        let width = self.text_width(&tree)?;
        let padding = padding_count(width, target);
        self.emit(
            LogLevel::Debug,
            "center.applied",
            [
                json_kv("width", json!(width)),
                json_kv("target", json!(target)),
                json_kv("padding", json!(padding)),
            ],
        );
        Ok(T::compose(" ".repeat(padding), tree))
    }

    pub fn center_in<T: StyledText>(&self, tree: T, region: Region) -> Result<T> {
        self.center(tree, region.width())
    }

    pub fn center_motd<T: StyledText>(&self, tree: T) -> Result<T> {
        self.center_in(tree, Region::Motd)
    }

    pub fn center_chat<T: StyledText>(&self, tree: T) -> Result<T> {
        self.center_in(tree, Region::Chat)
    }

    fn glyph_width(&self, c: char, bold: bool, position: usize) -> Result<u32> {
        if let Some(width) = char_width(c, bold) {
            return Ok(width);
        }

        let policy = self.settings.unknown_glyphs;
        let substitute = match policy {
            UnknownGlyphPolicy::Strict => return Err(CenterError::unknown(c, position)),
            UnknownGlyphPolicy::Fallback => fallback_width(bold),
            UnknownGlyphPolicy::Zero => 0,
        };
        self.emit(
            LogLevel::Warn,
            "glyph.unknown",
            [
                json_kv("char", json!(c.to_string())),
                json_kv("codepoint", json!(c as u32)),
                json_kv("position", json!(position)),
                json_kv("policy", json!(policy.as_str())),
                json_kv("width", json!(substitute)),
            ],
        );
        Ok(substitute)
    }

    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        fields: impl IntoIterator<Item = (String, Value)>,
    ) {
        let Some(logger) = &self.logger else {
            return;
        };
        if !logger.enabled(level) {
            return;
        }
        let event = event_with_fields(level, &self.settings.log_target, message, fields);
        let _ = logger.log_event(event);
    }
}
