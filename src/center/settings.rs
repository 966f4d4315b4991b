use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::width::{CHAT_WIDTH, MOTD_WIDTH};

/// What to do with characters the width table does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownGlyphPolicy {
    /// Measure as the default glyph (4 px, 5 px bold).
    #[default]
    Fallback,
    /// Measure as zero pixels.
    Zero,
    /// Fail the whole measurement.
    Strict,
}

impl UnknownGlyphPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fallback => "fallback",
            Self::Zero => "zero",
            Self::Strict => "strict",
        }
    }
}

/// Display region text is centered within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Server-list message area.
    Motd,
    /// Chat area.
    Chat,
    Custom(u32),
}

impl Region {
    pub fn width(&self) -> u32 {
        match self {
            Self::Motd => MOTD_WIDTH,
            Self::Chat => CHAT_WIDTH,
            Self::Custom(width) => *width,
        }
    }
}

/// Centerer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterSettings {
    pub unknown_glyphs: UnknownGlyphPolicy,
    /// Target field used for emitted log events.
    pub log_target: String,
}

impl Default for CenterSettings {
    fn default() -> Self {
        Self {
            unknown_glyphs: UnknownGlyphPolicy::default(),
            log_target: "pixel_center::center".to_string(),
        }
    }
}

impl CenterSettings {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_unknown_glyphs(mut self, policy: UnknownGlyphPolicy) -> Self {
        self.unknown_glyphs = policy;
        self
    }
}
