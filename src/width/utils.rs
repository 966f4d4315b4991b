//! Markup cleanup ahead of measurement.

use std::borrow::Cow;

/// Remove ANSI escape sequences so only literal glyphs are measured.
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    if !text.contains('\x1b') {
        return Cow::Borrowed(text);
    }
    let clean = strip_ansi_escapes::strip(text);
    Cow::Owned(String::from_utf8_lossy(&clean).into_owned())
}
