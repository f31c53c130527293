//! Immutable buffer snapshots and the read capability scanners work against.

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::fmt;

/// A read outside `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::OutOfRange { index, len } => {
                write!(f, "char index {index} out of range for buffer of {len} chars")
            }
        }
    }
}

impl std::error::Error for ReadError {}

/// Random-access char reads over a text buffer. Offsets are char indices.
pub trait TextSource {
    fn len_chars(&self) -> usize;

    fn char_at(&self, index: usize) -> Result<char, ReadError>;

    fn slice(&self, offset: usize, len: usize) -> Result<Cow<'_, str>, ReadError>;

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }
}

/// Borrows the slice's text when it sits in a single rope chunk.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

impl TextSource for Rope {
    fn len_chars(&self) -> usize {
        Rope::len_chars(self)
    }

    fn char_at(&self, index: usize) -> Result<char, ReadError> {
        self.get_char(index).ok_or(ReadError::OutOfRange {
            index,
            len: Rope::len_chars(self),
        })
    }

    fn slice(&self, offset: usize, len: usize) -> Result<Cow<'_, str>, ReadError> {
        let total = Rope::len_chars(self);
        let end = offset.checked_add(len).filter(|end| *end <= total).ok_or(
            ReadError::OutOfRange {
                index: offset.saturating_add(len),
                len: total,
            },
        )?;
        Ok(slice_to_cow(Rope::slice(self, offset..end)))
    }
}

/// A point-in-time copy of a document. Cloning shares the rope's chunks, so
/// the host can hand one to every scan without copying text.
#[derive(Debug, Clone, Default)]
pub struct BufferSnapshot {
    rope: Rope,
}

impl BufferSnapshot {
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn from_rope(rope: Rope) -> Self {
        Self { rope }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl From<&str> for BufferSnapshot {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl TextSource for BufferSnapshot {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, index: usize) -> Result<char, ReadError> {
        self.rope.char_at(index)
    }

    fn slice(&self, offset: usize, len: usize) -> Result<Cow<'_, str>, ReadError> {
        TextSource::slice(&self.rope, offset, len)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/snapshot.rs"]
mod tests;
