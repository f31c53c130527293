use super::is_identifier_char;
use crate::models::{ReadError, TextSource, TextSpan};

/// The identifier around `anchor`, or a zero-length span at `anchor` when
/// there is none or the buffer cannot be read there.
pub fn select_word<S: TextSource + ?Sized>(text: &S, anchor: usize) -> TextSpan {
    match word_bounds(text, anchor) {
        Ok(span) => span,
        Err(err) => {
            tracing::trace!(anchor, error = %err, "word selection fell back to caret");
            TextSpan::empty(anchor)
        }
    }
}

fn word_bounds<S: TextSource + ?Sized>(text: &S, anchor: usize) -> Result<TextSpan, ReadError> {
    let len = text.len_chars();
    if anchor > len {
        return Err(ReadError::OutOfRange { index: anchor, len });
    }

    let mut end = anchor;
    while end < len && is_identifier_char(text.char_at(end)?) {
        end += 1;
    }

    let mut start = anchor;
    while start > 0 {
        let ch = text.char_at(start - 1)?;
        if !is_identifier_char(ch) {
            break;
        }
        // A leading `$` is an interpolation sigil unless an identifier char precedes it.
        if ch == '$' {
            let before = match start.checked_sub(2) {
                Some(pos) => Some(text.char_at(pos)?),
                None => None,
            };
            if !before.is_some_and(is_identifier_char) {
                break;
            }
        }
        start -= 1;
    }

    Ok(TextSpan::from_range(start..end))
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/scan/word.rs"]
mod tests;
