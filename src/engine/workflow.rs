//! Workflow orchestration for scan runs.
//!
//! `scan` walks every configured (year, state) partition of a `MeetSource`,
//! runs the detector over each meet, and persists qualifying records to the
//! JSONL store. `build_rows` is the separate read-back pass that resolves
//! best marks into final output rows.

use tracing::{debug, info};

use crate::ScanResult;
use crate::core::config::ScanConfig;
use crate::core::schema::{Triple, TripleRow};
use crate::engine::detector::TripleDetector;
use crate::ingest::MeetSource;
use crate::report::rows::assemble_row;
use crate::storage::JsonlWriter;

/// Counters from one scan run.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    pub partitions_scanned: usize,
    pub partitions_missing: usize,
    pub meets: usize,
    pub triples: usize,
}

/// Run detection over every configured partition and persist the results.
///
/// Partitions without source data are skipped without error. The store
/// receives records in detection order.
pub fn scan(
    source: &dyn MeetSource,
    config: &ScanConfig,
    store: &JsonlWriter,
) -> ScanResult<ScanSummary> {
    config.validate()?;

    let mut summary = ScanSummary::default();
    let mut detector = TripleDetector::new(config);

    for partition in config.partitions() {
        let Some(meets) = source.load(&partition)? else {
            debug!("partition {partition} has no data from source {}", source.name());
            summary.partitions_missing += 1;
            continue;
        };

        info!("scanning {partition}: {} meets", meets.len());
        summary.partitions_scanned += 1;
        summary.meets += meets.len();

        for meet in &meets {
            detector.scan_meet(meet, &partition);
        }
    }

    let triples = detector.into_triples();
    summary.triples = triples.len();
    for triple in &triples {
        store.append(triple)?;
    }

    info!(
        "scan complete: {} triples from {} meets ({} partitions, {} missing)",
        summary.triples, summary.meets, summary.partitions_scanned, summary.partitions_missing
    );
    Ok(summary)
}

/// Resolve stored qualifying records into final output rows.
pub fn build_rows(triples: &[Triple], config: &ScanConfig) -> ScanResult<Vec<TripleRow>> {
    config.validate()?;
    triples.iter().map(|t| assemble_row(t, config)).collect()
}
