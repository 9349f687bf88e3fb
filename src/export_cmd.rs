use std::path::PathBuf;

use tracing::info;

use crate::ScanResult;
use crate::core::config::ScanConfig;
use crate::engine::workflow::build_rows;
use crate::storage::{CsvExporter, JsonlWriter};

pub fn run(store_path: PathBuf, output: Option<PathBuf>) -> ScanResult<()> {
    let config = ScanConfig::default();
    let store = JsonlWriter::new(&store_path);

    let triples = store.read_all()?;
    info!("loaded {} qualifying records from {}", triples.len(), store_path.display());

    let rows = build_rows(&triples, &config)?;
    let exporter = CsvExporter::new();

    match output {
        Some(path) => {
            exporter.export(&rows, &config, &path)?;
            println!("export: rows={} output={}", rows.len(), path.display());
        }
        None => exporter.export_to_stdout(&rows, &config)?,
    }

    Ok(())
}
