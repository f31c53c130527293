use super::call_context::CallContextLocator;
use super::partition::Partitions;
use super::selector::DoubleClickSelector;
use super::tokenizer::HeuristicScanner;
use crate::config::ScanSettings;
use crate::models::{BufferSnapshot, TextSpan};

/// Scans over one immutable snapshot with a fixed configuration.
///
/// Build a new session after every edit; nothing here observes the live
/// buffer.
#[derive(Debug, Clone)]
pub struct ScanSession {
    snapshot: BufferSnapshot,
    partitions: Option<Partitions>,
    selector: DoubleClickSelector,
    locator: CallContextLocator,
}

impl ScanSession {
    pub fn new(snapshot: BufferSnapshot, settings: &ScanSettings) -> Self {
        let partitions = settings
            .partition_aware
            .then(|| Partitions::compute(&snapshot));
        Self {
            snapshot,
            partitions,
            selector: settings.selector(),
            locator: settings.locator(),
        }
    }

    pub fn snapshot(&self) -> &BufferSnapshot {
        &self.snapshot
    }

    pub fn partitions(&self) -> Option<&Partitions> {
        self.partitions.as_ref()
    }

    pub fn scanner(&self) -> HeuristicScanner<'_, BufferSnapshot> {
        let scanner = HeuristicScanner::new(&self.snapshot);
        match &self.partitions {
            Some(partitions) => scanner.with_partitions(partitions),
            None => scanner,
        }
    }

    /// Double-click selection at `offset`.
    pub fn select_at(&self, offset: usize) -> TextSpan {
        self.selector.select(&self.snapshot, &self.scanner(), offset)
    }

    /// Where a parameter hint for an invocation at `offset` should anchor.
    pub fn call_context_anchor(&self, offset: usize) -> Option<usize> {
        self.locator.locate(&self.snapshot, &self.scanner(), offset)
    }

    pub fn surrounding_block(&self, offset: usize) -> Option<TextSpan> {
        self.scanner().find_surrounding_block(offset)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/scan/session.rs"]
mod tests;
