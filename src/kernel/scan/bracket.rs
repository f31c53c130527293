use super::tokenizer::Tokenizer;
use crate::models::{TextSource, TextSpan};

/// Bracket pairs recognised by the double-click matcher, opening first.
pub const BRACKET_PAIRS: [(char, char); 4] = [('{', '}'), ('(', ')'), ('[', ']'), ('<', '>')];

fn opening_of(close: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|(_, c)| *c == close)
        .map(|(o, _)| *o)
}

fn closing_of(open: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|(_, c)| *c)
}

/// The bracket pair touching `offset`, both brackets included.
///
/// The bracket just before `offset` wins over the one at `offset`. Brackets
/// inside strings or comments (as far as the tokenizer knows) never start a
/// match.
pub fn match_pair<S, T>(text: &S, tokenizer: &T, offset: usize) -> Option<TextSpan>
where
    S: TextSource + ?Sized,
    T: Tokenizer + ?Sized,
{
    let len = text.len_chars();
    if offset > len {
        tracing::trace!(offset, len, "bracket match outside buffer");
        return None;
    }

    let before = offset
        .checked_sub(1)
        .and_then(|pos| match_from(text, tokenizer, pos));
    before.or_else(|| match_from(text, tokenizer, offset))
}

fn match_from<S, T>(text: &S, tokenizer: &T, pos: usize) -> Option<TextSpan>
where
    S: TextSource + ?Sized,
    T: Tokenizer + ?Sized,
{
    let len = text.len_chars();
    if pos >= len || !tokenizer.is_code(pos) {
        return None;
    }
    let ch = text.char_at(pos).ok()?;

    if let Some(close) = closing_of(ch) {
        let end = tokenizer.find_closing_peer(pos + 1, len, ch, close)?;
        return Some(TextSpan::from_range(pos..end + 1));
    }
    if let Some(open) = opening_of(ch) {
        let start = tokenizer.find_opening_peer(pos.checked_sub(1)?, 0, open, ch)?;
        return Some(TextSpan::from_range(start..pos + 1));
    }
    None
}

/// The text strictly between the brackets of [`match_pair`]. Empty pairs such
/// as `()` give nothing to select.
pub fn select_bracket_content<S, T>(text: &S, tokenizer: &T, offset: usize) -> Option<TextSpan>
where
    S: TextSource + ?Sized,
    T: Tokenizer + ?Sized,
{
    match_pair(text, tokenizer, offset)?.inner()
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/scan/bracket.rs"]
mod tests;
