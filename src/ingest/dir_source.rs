//! Directory-backed meet source reading the collector's partition caches.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use super::MeetSource;
use crate::core::config::Partition;
use crate::core::schema::Meet;
use crate::{ScanError, ScanResult};

/// Reads `{year}_{state}.json` files from a cache directory.
///
/// Each file maps meet id to a meet record. Meets are returned in sorted-id
/// order so a re-run detects duplicates in the same order. A meet entry
/// that fails to deserialize is logged and skipped; the rest of the file is
/// still used.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        DirSource { root: root.as_ref().to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Cache file for a partition.
    pub fn partition_path(&self, partition: &Partition) -> PathBuf {
        self.root.join(format!("{}_{}.json", partition.year, partition.state))
    }
}

impl MeetSource for DirSource {
    fn name(&self) -> &str {
        "dir"
    }

    fn load(&self, partition: &Partition) -> ScanResult<Option<Vec<Meet>>> {
        let path = self.partition_path(partition);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = std::fs::read(&path)
            .map_err(|e| ScanError::Message(format!("failed to read {}: {e}", path.display())))?;
        debug!(
            "partition {} source {} sha256={}",
            partition,
            path.display(),
            sha256::digest(bytes.as_slice())
        );

        // Decode per meet so one malformed entry cannot sink the partition.
        let by_id: BTreeMap<String, Value> = serde_json::from_slice(&bytes)
            .map_err(|e| ScanError::Message(format!("failed to parse {}: {e}", path.display())))?;

        let mut meets = Vec::with_capacity(by_id.len());
        for (meet_id, value) in by_id {
            match serde_json::from_value::<Meet>(value) {
                Ok(meet) => meets.push(meet),
                Err(e) => {
                    warn!("skipping meet {meet_id} in {}: {e}", path.display());
                }
            }
        }

        Ok(Some(meets))
    }
}
