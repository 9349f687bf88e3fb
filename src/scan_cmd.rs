use std::path::PathBuf;

use tracing::info;

use crate::ScanResult;
use crate::core::config::ScanConfig;
use crate::ingest::DirSource;
use crate::storage::JsonlWriter;

pub fn run(data_dir: PathBuf, store_path: PathBuf) -> ScanResult<()> {
    let config = ScanConfig::default();
    let source = DirSource::new(&data_dir);
    let store = JsonlWriter::new(&store_path);

    if store.exists() {
        info!("recreating store {}", store_path.display());
        store.reset()?;
    }

    let summary = crate::engine::workflow::scan(&source, &config, &store)?;

    // Human summary
    println!(
        "scan: triples={} meets={} partitions={} missing={} store={}",
        summary.triples,
        summary.meets,
        summary.partitions_scanned,
        summary.partitions_missing,
        store_path.display()
    );

    Ok(())
}
