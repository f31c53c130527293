//! Heuristic token scanning around an offset.
//!
//! This is not a lexer: it only classifies the token adjacent to a position
//! and matches bracket peers, which is all the boundary resolvers need.

use super::partition::{Partition, Partitions};
use super::{is_identifier_char, is_identifier_start};
use crate::models::{TextSource, TextSpan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Do,
    Is,
    In,
    For,
    Try,
    New,
    Var,
    Case,
    Else,
    Null,
    This,
    True,
    Void,
    Break,
    Catch,
    Class,
    Const,
    False,
    Final,
    Super,
    Throw,
    While,
    Assert,
    Return,
    Static,
    Switch,
    Default,
    Finally,
    Continue,
}

impl Keyword {
    pub fn from_ident(ident: &str) -> Option<Self> {
        let kw = match ident {
            "if" => Keyword::If,
            "do" => Keyword::Do,
            "is" => Keyword::Is,
            "in" => Keyword::In,
            "for" => Keyword::For,
            "try" => Keyword::Try,
            "new" => Keyword::New,
            "var" => Keyword::Var,
            "case" => Keyword::Case,
            "else" => Keyword::Else,
            "null" => Keyword::Null,
            "this" => Keyword::This,
            "true" => Keyword::True,
            "void" => Keyword::Void,
            "break" => Keyword::Break,
            "catch" => Keyword::Catch,
            "class" => Keyword::Class,
            "const" => Keyword::Const,
            "false" => Keyword::False,
            "final" => Keyword::Final,
            "super" => Keyword::Super,
            "throw" => Keyword::Throw,
            "while" => Keyword::While,
            "assert" => Keyword::Assert,
            "return" => Keyword::Return,
            "static" => Keyword::Static,
            "switch" => Keyword::Switch,
            "default" => Keyword::Default,
            "finally" => Keyword::Finally,
            "continue" => Keyword::Continue,
            _ => return None,
        };
        Some(kw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Semicolon,
    Colon,
    Comma,
    Question,
    Equal,
    LessThan,
    GreaterThan,
    /// `=>`
    Arrow,
    Ident,
    Keyword(Keyword),
    /// Operators, number literals and anything else.
    Other,
}

impl TokenKind {
    fn from_punct(ch: char) -> Option<Self> {
        let kind = match ch {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            '?' => TokenKind::Question,
            '=' => TokenKind::Equal,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            _ => return None,
        };
        Some(kind)
    }

    fn from_word(word: &str) -> Self {
        match word.chars().next() {
            Some(first) if is_identifier_start(first) => Keyword::from_ident(word)
                .map(TokenKind::Keyword)
                .unwrap_or(TokenKind::Ident),
            _ => TokenKind::Other,
        }
    }
}

/// The capability the boundary resolvers need from a tokenizer.
///
/// Positions are char offsets. `start` is the first position examined, never
/// the bracket being matched; `low` is an inclusive lower bound for backward
/// scans and `high` an exclusive upper bound for forward ones.
pub trait Tokenizer {
    fn find_opening_peer(&self, start: usize, low: usize, open: char, close: char) -> Option<usize>;

    fn find_closing_peer(&self, start: usize, high: usize, open: char, close: char) -> Option<usize>;

    fn previous_token(&self, start: usize, low: usize) -> TokenKind;

    /// Whether `pos` is outside string literals and comments.
    fn is_code(&self, _pos: usize) -> bool {
        true
    }
}

/// Char-level scanner over a snapshot, optionally skipping strings and
/// comments.
pub struct HeuristicScanner<'a, S: TextSource + ?Sized> {
    text: &'a S,
    partitions: Option<&'a Partitions>,
}

impl<'a, S: TextSource + ?Sized> HeuristicScanner<'a, S> {
    pub fn new(text: &'a S) -> Self {
        Self {
            text,
            partitions: None,
        }
    }

    pub fn with_partitions(mut self, partitions: &'a Partitions) -> Self {
        self.partitions = Some(partitions);
        self
    }

    pub fn text(&self) -> &'a S {
        self.text
    }

    fn foreign_at(&self, pos: usize) -> Option<&'a Partition> {
        self.partitions.and_then(|p| p.foreign_at(pos))
    }

    fn read(&self, pos: usize) -> Option<char> {
        match self.text.char_at(pos) {
            Ok(ch) => Some(ch),
            Err(err) => {
                tracing::trace!(error = %err, "heuristic scan hit buffer edge");
                None
            }
        }
    }

    /// Highest code position in `[low, start]` where `stop` holds.
    pub fn scan_backward<F>(&self, start: usize, low: usize, mut stop: F) -> Option<usize>
    where
        F: FnMut(char, usize) -> bool,
    {
        let mut pos = start;
        while pos >= low {
            if let Some(foreign) = self.foreign_at(pos) {
                pos = foreign.range.start.checked_sub(1)?;
                continue;
            }
            let ch = self.read(pos)?;
            if stop(ch, pos) {
                return Some(pos);
            }
            pos = pos.checked_sub(1)?;
        }
        None
    }

    /// Lowest code position in `[start, high)` where `stop` holds.
    pub fn scan_forward<F>(&self, start: usize, high: usize, mut stop: F) -> Option<usize>
    where
        F: FnMut(char, usize) -> bool,
    {
        let high = high.min(self.text.len_chars());
        let mut pos = start;
        while pos < high {
            if let Some(foreign) = self.foreign_at(pos) {
                pos = foreign.range.end;
                continue;
            }
            let ch = self.read(pos)?;
            if stop(ch, pos) {
                return Some(pos);
            }
            pos += 1;
        }
        None
    }

    pub fn find_non_whitespace_backward(&self, start: usize, low: usize) -> Option<usize> {
        self.scan_backward(start, low, |ch, _| !ch.is_whitespace())
    }

    pub fn find_non_whitespace_forward(&self, start: usize, high: usize) -> Option<usize> {
        self.scan_forward(start, high, |ch, _| !ch.is_whitespace())
    }

    /// The token that begins at or after `start`, not reaching `high`.
    pub fn next_token(&self, start: usize, high: usize) -> TokenKind {
        let Some(pos) = self.find_non_whitespace_forward(start, high) else {
            return TokenKind::Eof;
        };
        let Some(ch) = self.read(pos) else {
            return TokenKind::Eof;
        };

        if ch == '=' && pos + 1 < high && self.read(pos + 1) == Some('>') {
            return TokenKind::Arrow;
        }
        if let Some(kind) = TokenKind::from_punct(ch) {
            return kind;
        }
        if !is_identifier_char(ch) {
            return TokenKind::Other;
        }

        let high = high.min(self.text.len_chars());
        let mut to = pos + 1;
        while to < high && self.is_code(to) && self.read(to).is_some_and(is_identifier_char) {
            to += 1;
        }
        self.classify_word(pos, to)
    }

    fn classify_word(&self, from: usize, to: usize) -> TokenKind {
        match self.text.slice(from, to - from) {
            Ok(word) => TokenKind::from_word(&word),
            Err(_) => TokenKind::Eof,
        }
    }

    /// The innermost `{ ... }` around `offset`, braces included. A brace at
    /// `offset` itself is not treated as enclosing.
    pub fn find_surrounding_block(&self, offset: usize) -> Option<TextSpan> {
        if offset < 1 || offset >= self.text.len_chars() {
            return None;
        }
        let begin = self.find_opening_peer(offset - 1, 0, '{', '}')?;
        let end = self.find_closing_peer(offset, self.text.len_chars(), '{', '}')?;
        Some(TextSpan::new(begin, end + 1 - begin))
    }
}

impl<S: TextSource + ?Sized> Tokenizer for HeuristicScanner<'_, S> {
    fn find_opening_peer(&self, start: usize, low: usize, open: char, close: char) -> Option<usize> {
        let mut depth = 1usize;
        let mut pos = start;
        loop {
            let found = self.scan_backward(pos, low, |ch, _| ch == open || ch == close)?;
            if self.read(found)? == close {
                depth += 1;
            } else {
                depth -= 1;
            }
            if depth == 0 {
                return Some(found);
            }
            pos = found.checked_sub(1)?;
        }
    }

    fn find_closing_peer(&self, start: usize, high: usize, open: char, close: char) -> Option<usize> {
        let mut depth = 1usize;
        let mut pos = start;
        loop {
            let found = self.scan_forward(pos, high, |ch, _| ch == open || ch == close)?;
            if self.read(found)? == open {
                depth += 1;
            } else {
                depth -= 1;
            }
            if depth == 0 {
                return Some(found);
            }
            pos = found + 1;
        }
    }

    fn previous_token(&self, start: usize, low: usize) -> TokenKind {
        let Some(pos) = self.find_non_whitespace_backward(start, low) else {
            return TokenKind::Eof;
        };
        let Some(ch) = self.read(pos) else {
            return TokenKind::Eof;
        };

        if ch == '>' && pos > low && self.is_code(pos - 1) && self.read(pos - 1) == Some('=') {
            return TokenKind::Arrow;
        }
        if let Some(kind) = TokenKind::from_punct(ch) {
            return kind;
        }
        if !is_identifier_char(ch) {
            return TokenKind::Other;
        }

        let mut from = pos;
        while from > low
            && self.is_code(from - 1)
            && self.read(from - 1).is_some_and(is_identifier_char)
        {
            from -= 1;
        }
        self.classify_word(from, pos + 1)
    }

    fn is_code(&self, pos: usize) -> bool {
        self.partitions.is_none_or(|p| p.is_code(pos))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/scan/tokenizer.rs"]
mod tests;
