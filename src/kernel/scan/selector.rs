use serde::{Deserialize, Serialize};

use super::bracket::select_bracket_content;
use super::quote::match_quoted;
use super::tokenizer::Tokenizer;
use super::word::select_word;
use crate::models::{TextSource, TextSpan};

/// One double-click strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Matcher {
    Bracket,
    Quote,
    Word,
}

impl Matcher {
    pub const DEFAULT_ORDER: [Matcher; 3] = [Matcher::Bracket, Matcher::Quote, Matcher::Word];

    pub fn name(self) -> &'static str {
        match self {
            Matcher::Bracket => "bracket",
            Matcher::Quote => "quote",
            Matcher::Word => "word",
        }
    }

    pub fn try_match<S, T>(self, text: &S, tokenizer: &T, offset: usize) -> Option<TextSpan>
    where
        S: TextSource + ?Sized,
        T: Tokenizer + ?Sized,
    {
        match self {
            Matcher::Bracket => select_bracket_content(text, tokenizer, offset),
            Matcher::Quote => match_quoted(text, offset),
            // A caret-only word means no word here, so later strategies still run.
            Matcher::Word => Some(select_word(text, offset)).filter(|span| !span.is_empty()),
        }
    }
}

/// Ordered matcher pipeline for double-click selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleClickSelector {
    order: Vec<Matcher>,
}

impl Default for DoubleClickSelector {
    fn default() -> Self {
        Self::new(Matcher::DEFAULT_ORDER.to_vec())
    }
}

impl DoubleClickSelector {
    pub fn new(order: Vec<Matcher>) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &[Matcher] {
        &self.order
    }

    /// First hit of the pipeline, or a zero-length span at `offset`.
    pub fn select<S, T>(&self, text: &S, tokenizer: &T, offset: usize) -> TextSpan
    where
        S: TextSource + ?Sized,
        T: Tokenizer + ?Sized,
    {
        for matcher in &self.order {
            if let Some(span) = matcher.try_match(text, tokenizer, offset) {
                tracing::debug!(
                    offset,
                    matcher = matcher.name(),
                    start = span.offset,
                    len = span.len,
                    "double-click resolved"
                );
                return span;
            }
        }
        tracing::debug!(offset, "double-click matched nothing");
        TextSpan::empty(offset)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/scan/selector.rs"]
mod tests;
