//! Ingestion layer: where cached partition data enters the pipeline.
//!
//! The external collector fetches meet calendars and results over the
//! network, rate-limited, and caches one JSON file per (year, state)
//! partition. This crate only ever reads those caches; `MeetSource` is the
//! seam, `DirSource` the on-disk implementation, and `MockSource` the
//! in-memory implementation used by tests.

pub mod dir_source;
pub mod mock;

use crate::ScanResult;
use crate::core::config::Partition;
use crate::core::schema::Meet;

/// Provider of per-partition meet data.
pub trait MeetSource {
    /// Source name for logs.
    fn name(&self) -> &str;

    /// Load one partition's meets.
    ///
    /// `Ok(None)` means the partition has no source data and is skipped
    /// without error. Errors are reserved for data that exists but cannot
    /// be read at all.
    fn load(&self, partition: &Partition) -> ScanResult<Option<Vec<Meet>>>;
}

// Re-export key types for convenience
pub use dir_source::DirSource;
pub use mock::MockSource;
