//! Coalescing of edit notifications into one dirty region per document.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::models::Region;

/// The running aggregate of one document's edits since the last reconcile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileBatch {
    pending: Region,
}

impl ReconcileBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one edit into the batch.
    ///
    /// When the edit cannot be merged, the aggregate so far is returned for
    /// the caller to reconcile and the edit starts the next batch.
    pub fn record(&mut self, offset: usize, old_len: usize, new_len: usize) -> Option<Region> {
        match self.pending.combine(offset, old_len, new_len) {
            Ok(merged) => {
                self.pending = merged;
                None
            }
            Err(err) => {
                let flushed = self.pending;
                self.pending = Region::new(offset, old_len, new_len);
                tracing::debug!(%flushed, next = %self.pending, "{err}");
                Some(flushed)
            }
        }
    }

    pub fn record_region(&mut self, edit: Region) -> Option<Region> {
        self.record(edit.offset, edit.old_len, edit.new_len)
    }

    pub fn pending(&self) -> Option<Region> {
        (!self.pending.is_empty()).then_some(self.pending)
    }

    pub fn take(&mut self) -> Option<Region> {
        let pending = self.pending();
        self.pending = Region::EMPTY;
        pending
    }

    pub fn is_clean(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Per-document batches keyed by a host-chosen document id.
///
/// Mutation takes `&mut self`; hosts feeding edits from several threads put
/// the tracker behind a lock.
#[derive(Debug, Clone)]
pub struct DirtyRegionTracker<K> {
    batches: FxHashMap<K, ReconcileBatch>,
}

impl<K> Default for DirtyRegionTracker<K> {
    fn default() -> Self {
        Self {
            batches: FxHashMap::default(),
        }
    }
}

impl<K: Eq + Hash> DirtyRegionTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`ReconcileBatch::record`].
    pub fn record(&mut self, doc: K, offset: usize, old_len: usize, new_len: usize) -> Option<Region> {
        self.batches
            .entry(doc)
            .or_default()
            .record(offset, old_len, new_len)
    }

    pub fn pending(&self, doc: &K) -> Option<Region> {
        self.batches.get(doc).and_then(ReconcileBatch::pending)
    }

    pub fn take(&mut self, doc: &K) -> Option<Region> {
        self.batches.remove(doc).and_then(|mut batch| batch.take())
    }

    /// Every pending region, leaving the tracker clean.
    pub fn drain(&mut self) -> Vec<(K, Region)> {
        self.batches
            .drain()
            .filter_map(|(doc, mut batch)| batch.take().map(|region| (doc, region)))
            .collect()
    }

    /// Drops a closed document's batch without reconciling it.
    pub fn forget(&mut self, doc: &K) -> bool {
        self.batches.remove(doc).is_some()
    }

    /// Number of documents with a pending region.
    pub fn dirty_count(&self) -> usize {
        self.batches.values().filter(|b| !b.is_clean()).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/reconcile.rs"]
mod tests;
