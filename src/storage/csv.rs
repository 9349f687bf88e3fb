//! CSV export for the final fixed-column table.

use std::io::Write;
use std::path::Path;

use crate::core::config::ScanConfig;
use crate::core::schema::TripleRow;
use crate::{ScanError, ScanResult};

/// Fixed leading columns, followed by one column per target event code.
pub const BASE_HEADERS: &[&str] = &["name", "gender", "meetName", "date", "year", "url"];

/// CSV exporter for output rows.
///
/// Emits a header row built from the fixed columns plus the configured
/// target event codes, in configured order, so column order is
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        CsvExporter
    }

    /// Header row for a given configuration.
    pub fn headers(&self, config: &ScanConfig) -> Vec<String> {
        BASE_HEADERS
            .iter()
            .map(|h| (*h).to_string())
            .chain(config.target_events.iter().map(|e| e.code.clone()))
            .collect()
    }

    /// Export rows to a CSV file.
    ///
    /// # Errors
    /// Returns an error if file operations or CSV writing fails.
    pub fn export(&self, rows: &[TripleRow], config: &ScanConfig, output: &Path) -> ScanResult<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ScanError::Message(format!("failed to create directory: {e}")))?;
            }
        }

        let file = std::fs::File::create(output)
            .map_err(|e| ScanError::Message(format!("failed to create file: {e}")))?;

        self.export_to_writer(rows, config, file)
    }

    /// Export rows to stdout.
    pub fn export_to_stdout(&self, rows: &[TripleRow], config: &ScanConfig) -> ScanResult<()> {
        let stdout = std::io::stdout();
        let handle = stdout.lock();
        self.export_to_writer(rows, config, handle)
    }

    /// Export rows to any writer implementing Write.
    pub fn export_to_writer<W: Write>(
        &self,
        rows: &[TripleRow],
        config: &ScanConfig,
        writer: W,
    ) -> ScanResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(self.headers(config))
            .map_err(|e| ScanError::Message(format!("failed to write CSV headers: {e}")))?;

        for row in rows {
            csv_writer
                .write_record(self.row_to_record(row))
                .map_err(|e| ScanError::Message(format!("failed to write CSV row: {e}")))?;
        }

        csv_writer
            .flush()
            .map_err(|e| ScanError::Message(format!("failed to flush CSV writer: {e}")))?;

        Ok(())
    }

    fn row_to_record(&self, row: &TripleRow) -> Vec<String> {
        let mut out = vec![
            row.name.clone(),
            row.gender.clone(),
            row.meet_name.clone(),
            row.date.clone(),
            row.year.to_string(),
            row.url.clone(),
        ];
        out.extend(row.marks.iter().cloned());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(name: &str) -> TripleRow {
        TripleRow {
            name: name.to_string(),
            gender: "F".to_string(),
            meet_name: "Invitational".to_string(),
            date: "2025-05-10".to_string(),
            year: 2025,
            url: "https://www.athletic.net/TrackAndField/meet/m1/results".to_string(),
            marks: vec!["58.21".to_string(), "2:04.55".to_string(), "1.75".to_string()],
        }
    }

    #[test]
    fn test_headers_include_event_codes_in_order() {
        let exporter = CsvExporter::new();
        let config = ScanConfig::default();
        let headers = exporter.headers(&config);
        assert_eq!(headers, vec!["name", "gender", "meetName", "date", "year", "url", "400H", "800m", "HJ"]);
    }

    #[test]
    fn test_row_record_matches_header_length() {
        let exporter = CsvExporter::new();
        let config = ScanConfig::default();
        let record = exporter.row_to_record(&make_row("Dana Reyes"));
        assert_eq!(record.len(), exporter.headers(&config).len());
    }

    #[test]
    fn test_export_to_writer() {
        let exporter = CsvExporter::new();
        let config = ScanConfig::default();

        let mut buffer = Vec::new();
        exporter.export_to_writer(&[make_row("Dana Reyes")], &config, &mut buffer).unwrap();

        let csv_str = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv_str.lines().collect();

        // Header + 1 data row
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "name,gender,meetName,date,year,url,400H,800m,HJ");
        assert!(lines[1].starts_with("Dana Reyes,F,Invitational,2025-05-10,2025,"));
        assert!(lines[1].ends_with("58.21,2:04.55,1.75"));
    }

    #[test]
    fn test_export_empty_rows_writes_header_only() {
        let exporter = CsvExporter::new();
        let config = ScanConfig::default();

        let mut buffer = Vec::new();
        exporter.export_to_writer(&[], &config, &mut buffer).unwrap();

        let csv_str = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv_str.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("name,gender"));
    }

    #[test]
    fn test_export_to_file() {
        let exporter = CsvExporter::new();
        let config = ScanConfig::default();

        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("triples.csv");

        exporter.export(&[make_row("Dana Reyes")], &config, &output_path).unwrap();

        assert!(output_path.exists());
        let contents = std::fs::read_to_string(&output_path).unwrap();
        assert!(contents.contains("meetName"));
        assert!(contents.contains("Dana Reyes"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let exporter = CsvExporter::new();
        let config = ScanConfig::default();

        let mut row = make_row("Dana Reyes");
        row.meet_name = "Relays, Day 2".to_string();

        let mut buffer = Vec::new();
        exporter.export_to_writer(&[row], &config, &mut buffer).unwrap();

        let csv_str = String::from_utf8(buffer).unwrap();
        assert!(csv_str.contains("\"Relays, Day 2\""));
    }
}
