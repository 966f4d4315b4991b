use thiserror::Error;

/// Unified result type for the centering crate.
pub type Result<T> = std::result::Result<T, CenterError>;

/// Errors surfaced while measuring or centering styled text.
#[derive(Debug, Error)]
pub enum CenterError {
    #[error("no width known for {character:?} (U+{codepoint:04X}) at position {position}")]
    UnknownCharacter {
        character: char,
        codepoint: u32,
        position: usize,
    },
    #[error("invalid center settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl CenterError {
    pub(crate) fn unknown(character: char, position: usize) -> Self {
        Self::UnknownCharacter {
            character,
            codepoint: character as u32,
            position,
        }
    }
}
