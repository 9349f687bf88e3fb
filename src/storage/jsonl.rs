//! JSONL (JSON Lines) storage for qualifying records.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::core::schema::{SCHEMA_VERSION, Triple};
use crate::{ScanError, ScanResult};

/// JSONL writer/reader for qualifying records.
///
/// Each record is stored as a single JSON line, so the scan pass can append
/// as it goes and the export pass can stream them back without any
/// intermediate structure.
#[derive(Debug, Clone)]
pub struct JsonlWriter {
    path: PathBuf,
}

impl JsonlWriter {
    /// Create a new JsonlWriter for the given path.
    ///
    /// The file will be created if it doesn't exist when writing.
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonlWriter { path: path.as_ref().to_path_buf() }
    }

    /// Get the path to the JSONL file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a single record.
    ///
    /// # Errors
    /// Returns an error if the record's schema_version doesn't match
    /// SCHEMA_VERSION, or if file operations or serialization fail.
    pub fn append(&self, record: &Triple) -> ScanResult<()> {
        if record.schema_version != SCHEMA_VERSION {
            return Err(ScanError::Message(format!(
                "schema version mismatch: record has v{}, expected v{}",
                record.schema_version, SCHEMA_VERSION
            )));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ScanError::Message(format!("failed to create directory: {e}")))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ScanError::Message(format!("failed to open file: {e}")))?;

        let json = serde_json::to_string(record)
            .map_err(|e| ScanError::Message(format!("failed to serialize record: {e}")))?;

        writeln!(file, "{}", json)
            .map_err(|e| ScanError::Message(format!("failed to write record: {e}")))?;

        Ok(())
    }

    /// Read all records in insertion order.
    ///
    /// # Errors
    /// Returns an error if the file doesn't exist, file operations fail, or
    /// any line fails to deserialize.
    pub fn read_all(&self) -> ScanResult<Vec<Triple>> {
        if !self.path.exists() {
            return Err(ScanError::Message(format!("file not found: {}", self.path.display())));
        }

        let file = File::open(&self.path)
            .map_err(|e| ScanError::Message(format!("failed to open file: {e}")))?;

        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(|e| {
                ScanError::Message(format!("failed to read line {}: {e}", line_num + 1))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let record: Triple = serde_json::from_str(&line).map_err(|e| {
                ScanError::Message(format!("failed to parse line {}: {e}", line_num + 1))
            })?;

            records.push(record);
        }

        Ok(records)
    }

    /// Check if the JSONL file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove the store file if present, so a fresh scan starts empty.
    pub fn reset(&self) -> ScanResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .map_err(|e| ScanError::Message(format!("failed to remove store: {e}")))?;
        }
        Ok(())
    }

    /// Get the number of records in the file.
    ///
    /// This reads through the entire file to count lines.
    pub fn count(&self) -> ScanResult<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.path)
            .map_err(|e| ScanError::Message(format!("failed to open file: {e}")))?;

        let reader = BufReader::new(file);
        let count = reader
            .lines()
            .filter_map(|l| l.ok())
            .filter(|l| !l.trim().is_empty())
            .count();

        Ok(count)
    }
}
