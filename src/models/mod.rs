//! Value types shared by the reconciler and the scanners.

pub mod region;
pub mod snapshot;
pub mod span;

pub use region::{Disjoint, Region};
pub use snapshot::{slice_to_cow, BufferSnapshot, ReadError, TextSource};
pub use span::{ScanBounds, TextSpan};
