//! Engine logic: dirty-region batching and lexical boundary resolution.

pub mod reconcile;
pub mod scan;

pub use reconcile::{DirtyRegionTracker, ReconcileBatch};
