//! Strongly-typed identifiers and the [`Position`] type alias.

use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`DatasetId`] allocation.
static DATASET_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a raster dataset.
///
/// Allocated from a monotonic atomic counter via [`DatasetId::next`].
/// Carried by change notifications so observers can tell which dataset
/// needs a redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatasetId(u64);

impl DatasetId {
    /// Allocate a fresh, unique dataset ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(DATASET_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fully specified position in an n-dimensional raster.
///
/// `position[d]` is the index along raster axis `d`. Uses `SmallVec` to
/// avoid heap allocation for rasters of up to 8 dimensions.
pub type Position = SmallVec<[i64; 8]>;
