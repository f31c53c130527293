use std::ops::Range;

/// A resolved `offset..offset + len` span in char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextSpan {
    pub offset: usize,
    pub len: usize,
}

impl TextSpan {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            offset: range.start,
            len: range.end.saturating_sub(range.start),
        }
    }

    /// Zero-length span at `at`, the fallback selection of every scanner.
    pub fn empty(at: usize) -> Self {
        Self { offset: at, len: 0 }
    }

    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The span between a pair of one-char delimiters, or `None` when the
    /// delimiters are adjacent.
    pub fn inner(&self) -> Option<TextSpan> {
        if self.len > 2 {
            Some(TextSpan::new(self.offset + 1, self.len - 2))
        } else {
            None
        }
    }
}

/// Search window for bounded scans: `low` inclusive, `high` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanBounds {
    pub low: usize,
    pub high: usize,
}

impl ScanBounds {
    pub fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }

    /// Window reaching at most `k` chars behind `offset`: positions strictly
    /// greater than `offset - k`, the first one excluded being `max(-1, offset - k)`.
    pub fn lookback(offset: usize, k: usize) -> Self {
        let low = if offset >= k { offset - k + 1 } else { 0 };
        Self { low, high: offset }
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.low <= pos && pos < self.high
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/span.rs"]
mod tests;
