//! Styled text capability consumed by the centering code.
//!
//! Callers with their own rich-text model implement [`StyledText`]; the
//! bundled [`TextNode`] covers everyone else.

mod core;

pub use self::core::{StyledText, TextNode, TextRun, runs, styled_chars};
