//! Code / string / comment partitioning of a snapshot.
//!
//! The heuristic scanner consults partitions so that brackets and quotes
//! inside literals and comments never take part in peer matching.

use crate::models::TextSource;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionKind {
    Code,
    String,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub range: Range<usize>,
    pub kind: PartitionKind,
}

/// Sorted, non-overlapping non-code ranges. Everything else is code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitions {
    foreign: Vec<Partition>,
}

impl Partitions {
    /// Treats the whole buffer as code.
    pub fn code_only() -> Self {
        Self::default()
    }

    pub fn compute<S: TextSource + ?Sized>(text: &S) -> Self {
        let chars: Vec<char> = match text.slice(0, text.len_chars()) {
            Ok(all) => all.chars().collect(),
            Err(err) => {
                tracing::debug!(error = %err, "partitioning skipped");
                return Self::default();
            }
        };

        let n = chars.len();
        let at = |i: usize| chars.get(i).copied();
        let mut foreign = Vec::new();
        let mut i = 0usize;

        while i < n {
            let c = chars[i];
            match (c, at(i + 1)) {
                ('/', Some('/')) => {
                    let start = i;
                    i += 2;
                    while i < n && chars[i] != '\n' {
                        i += 1;
                    }
                    foreign.push(Partition {
                        range: start..i,
                        kind: PartitionKind::Comment,
                    });
                }
                ('/', Some('*')) => {
                    let start = i;
                    let mut depth = 1usize;
                    i += 2;
                    while i < n && depth > 0 {
                        match (chars[i], at(i + 1)) {
                            ('/', Some('*')) => {
                                depth += 1;
                                i += 2;
                            }
                            ('*', Some('/')) => {
                                depth -= 1;
                                i += 2;
                            }
                            _ => i += 1,
                        }
                    }
                    foreign.push(Partition {
                        range: start..i.min(n),
                        kind: PartitionKind::Comment,
                    });
                }
                ('"' | '\'', _) => {
                    let raw = i > 0
                        && chars[i - 1] == 'r'
                        && (i < 2 || !super::is_identifier_char(chars[i - 2]));
                    let start = if raw { i - 1 } else { i };
                    let end = string_end(&chars, i, raw);
                    foreign.push(Partition {
                        range: start..end,
                        kind: PartitionKind::String,
                    });
                    i = end;
                }
                _ => i += 1,
            }
        }

        Self { foreign }
    }

    pub fn kind_at(&self, offset: usize) -> PartitionKind {
        self.foreign_at(offset)
            .map(|p| p.kind)
            .unwrap_or(PartitionKind::Code)
    }

    pub fn is_code(&self, offset: usize) -> bool {
        self.kind_at(offset) == PartitionKind::Code
    }

    /// The string or comment range covering `offset`, if any.
    pub fn foreign_at(&self, offset: usize) -> Option<&Partition> {
        let idx = self
            .foreign
            .partition_point(|p| p.range.start <= offset);
        let candidate = self.foreign.get(idx.checked_sub(1)?)?;
        candidate.range.contains(&offset).then_some(candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Partition> {
        self.foreign.iter()
    }
}

/// Index just past the literal opened at `open`. Unterminated single-line
/// literals stop at the end of the line; unterminated triple-quoted ones run
/// to the end of the buffer.
fn string_end(chars: &[char], open: usize, raw: bool) -> usize {
    let n = chars.len();
    let quote = chars[open];
    let triple = chars.get(open + 1) == Some(&quote) && chars.get(open + 2) == Some(&quote);

    let mut i = open + if triple { 3 } else { 1 };
    while i < n {
        let c = chars[i];
        if c == '\\' && !raw {
            i += 2;
            continue;
        }
        if triple {
            if c == quote && chars.get(i + 1) == Some(&quote) && chars.get(i + 2) == Some(&quote) {
                return i + 3;
            }
        } else if c == quote {
            return i + 1;
        } else if c == '\n' {
            return i;
        }
        i += 1;
    }
    n
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/scan/partition.rs"]
mod tests;
