pub mod scan_cmd;
pub mod export_cmd;

pub mod core;
pub mod engine;
pub mod ingest;
pub mod mark;
pub mod report;
pub mod storage;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type ScanResult<T> = Result<T, ScanError>;

// Re-export key types for convenience
pub use crate::core::config::{MarkKind, Partition, ScanConfig, TargetEvent};
pub use crate::core::schema::{Meet, Performance, SCHEMA_VERSION, Triple, TripleRow};
pub use crate::engine::detector::TripleDetector;
pub use crate::engine::workflow::{ScanSummary, build_rows, scan};
pub use crate::ingest::{DirSource, MeetSource, MockSource};
pub use crate::storage::{CsvExporter, JsonlWriter};
