//! Engine module: partitions meet data by athlete and detects triples.
//!
//! # Architecture
//!
//! - **grouper**: pass-through partition of a meet's performance list by
//!   athlete id. No filtering, no dedup.
//! - **detector**: owns the run-wide accumulator of qualifying records and
//!   the exact-set match rule against the configured target events.
//! - **workflow**: composes a `MeetSource`, the detector, and the storage
//!   layer into the scan and export passes.
//!
//! # Boundaries
//!
//! - The grouper knows nothing about target events - that's the detector's
//!   job.
//! - The detector never touches I/O - sources and stores are handed in by
//!   the workflow.

pub mod detector;
pub mod grouper;
pub mod workflow;

// Re-export key types for convenience
pub use detector::TripleDetector;
pub use grouper::{AthleteGroup, group_by_athlete};
pub use workflow::{ScanSummary, build_rows, scan};
