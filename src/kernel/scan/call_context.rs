use super::tokenizer::{TokenKind, Tokenizer};
use crate::models::{ScanBounds, TextSource};

/// How far behind the invocation offset the enclosing call is looked for.
pub const CALL_CONTEXT_LOOKBACK: usize = 200;

/// Position just inside the `(` of the innermost argument list around
/// `offset`.
///
/// Enclosing parens are walked outward; the first one preceded by an
/// identifier or a `>` (generic constructor) is a call. Grouping parens and
/// keyword parens such as `if (...)` are stepped over. Nothing before
/// `offset - lookback` is examined.
pub fn find_enclosing_call_paren<S, T>(
    text: &S,
    tokenizer: &T,
    offset: usize,
    lookback: usize,
) -> Option<usize>
where
    S: TextSource + ?Sized,
    T: Tokenizer + ?Sized,
{
    let len = text.len_chars();
    if offset > len {
        tracing::trace!(offset, len, "call context requested outside buffer");
        return None;
    }

    let bounds = ScanBounds::lookback(offset, lookback);
    let mut pos = offset.checked_sub(1)?;
    while pos >= bounds.low {
        let paren = tokenizer.find_opening_peer(pos, bounds.low, '(', ')')?;
        let before = paren.checked_sub(1)?;
        match tokenizer.previous_token(before, bounds.low) {
            TokenKind::Ident | TokenKind::GreaterThan => return Some(paren + 1),
            _ => pos = before,
        }
    }
    None
}

/// [`find_enclosing_call_paren`] with a configured lookback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContextLocator {
    lookback: usize,
}

impl Default for CallContextLocator {
    fn default() -> Self {
        Self::new(CALL_CONTEXT_LOOKBACK)
    }
}

impl CallContextLocator {
    pub fn new(lookback: usize) -> Self {
        Self { lookback }
    }

    pub fn lookback(&self) -> usize {
        self.lookback
    }

    pub fn locate<S, T>(&self, text: &S, tokenizer: &T, offset: usize) -> Option<usize>
    where
        S: TextSource + ?Sized,
        T: Tokenizer + ?Sized,
    {
        let anchor = find_enclosing_call_paren(text, tokenizer, offset, self.lookback);
        tracing::debug!(offset, ?anchor, "call context located");
        anchor
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/scan/call_context.rs"]
mod tests;
