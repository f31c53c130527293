//! zcode-reconcile: dirty-region coalescing and lexical boundary scanning
//! for an editor's incremental analysis.
//!
//! Modules:
//! - models: value types (Region, TextSpan) and immutable buffer snapshots
//! - kernel: edit coalescing (reconcile) and boundary scanners (scan)
//! - config: scan settings

pub mod config;
pub mod kernel;
pub mod models;
