//! Dirty-region value type and the merge rule that coalesces successive edits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// One text replacement: starting at `offset`, `old_len` chars of the prior
/// content were replaced by `new_len` chars.
///
/// `old_len == new_len == 0` is the canonical empty region and the identity
/// element for [`Region::combine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub offset: usize,
    pub old_len: usize,
    pub new_len: usize,
}

/// Returned by [`Region::combine`] when the incoming edit does not touch the
/// aggregate's output span. The caller flushes the aggregate and starts a new
/// batch with the edit alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disjoint;

impl fmt::Display for Disjoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edit is disjoint from the pending dirty region")
    }
}

impl std::error::Error for Disjoint {}

impl Region {
    pub const EMPTY: Region = Region {
        offset: 0,
        old_len: 0,
        new_len: 0,
    };

    pub fn new(offset: usize, old_len: usize, new_len: usize) -> Self {
        Self {
            offset,
            old_len,
            new_len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.old_len == 0 && self.new_len == 0
    }

    /// End of the replaced span in pre-edit coordinates.
    pub fn old_end(&self) -> usize {
        self.offset + self.old_len
    }

    /// End of the replacement in post-edit coordinates.
    pub fn new_end(&self) -> usize {
        self.offset + self.new_len
    }

    /// The span that is dirty in the current buffer.
    pub fn output_span(&self) -> Range<usize> {
        self.offset..self.new_end()
    }

    pub fn delta(&self) -> isize {
        self.new_len as isize - self.old_len as isize
    }

    /// Folds one more edit into this aggregate.
    ///
    /// The edit's replaced span `[offset, offset + old_len)` is expressed in
    /// the coordinates of the buffer *after* everything already aggregated,
    /// so it must end inside `[self.offset, self.new_end()]`.
    pub fn combine(self, offset: usize, old_len: usize, new_len: usize) -> Result<Region, Disjoint> {
        if old_len == 0 && new_len == 0 {
            return Ok(self);
        }
        if self.is_empty() {
            return Ok(Region::new(offset, old_len, new_len));
        }

        let edit_end = offset + old_len;
        if edit_end < self.offset || edit_end > self.new_end() {
            return Err(Disjoint);
        }

        let merged_offset = self.offset.min(offset);
        let left_ext = self.offset - merged_offset;
        // edit_end <= new_end keeps the subtraction non-negative.
        let merged_new = self.new_len + left_ext + new_len - old_len;

        Ok(Region {
            offset: merged_offset,
            old_len: self.old_len + left_ext,
            new_len: merged_new,
        })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{} -{} +{}", self.offset, self.old_len, self.new_len)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/region.rs"]
mod tests;
