//! Fixed scan configuration.
//!
//! The target event set, season years, and state partitions are process-wide
//! constants. They are materialized into an explicit `ScanConfig` value that
//! the pipeline entry points take by reference, so nothing in the engine
//! reads ambient state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{ScanError, ScanResult};

/// The fixed target set: a hurdles race, a distance race, and a jump.
pub const TARGET_EVENTS: [(&str, MarkKind); 3] = [
    ("400H", MarkKind::Time),
    ("800m", MarkKind::Time),
    ("HJ", MarkKind::Field),
];

/// Season years covered by a scan.
pub const SEASON_YEARS: [u16; 2] = [2024, 2025];

/// State partitions fetched by the external collector.
pub const STATE_SOURCES: [&str; 5] = ["NY", "NJ", "PA", "CT", "MA"];

/// Base URL for meet results pages.
pub const RESULTS_URL_BASE: &str = "https://www.athletic.net/TrackAndField/meet";

/// How an event's marks compare numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    /// Clock-like marks, lower elapsed time wins.
    Time,
    /// Height/distance marks, greater measurement wins.
    Field,
}

/// One event in the target set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetEvent {
    pub code: String,
    pub kind: MarkKind,
}

/// One (season year, state source) slice of ingested meet data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Partition {
    pub year: u16,
    pub state: String,
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.year, self.state)
    }
}

/// Immutable configuration passed into the pipeline entry points.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub target_events: Vec<TargetEvent>,
    pub years: Vec<u16>,
    pub states: Vec<String>,
    pub results_url_base: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            target_events: TARGET_EVENTS
                .iter()
                .map(|(code, kind)| TargetEvent { code: (*code).to_string(), kind: *kind })
                .collect(),
            years: SEASON_YEARS.to_vec(),
            states: STATE_SOURCES.iter().map(|s| (*s).to_string()).collect(),
            results_url_base: RESULTS_URL_BASE.to_string(),
        }
    }
}

impl ScanConfig {
    /// The distinct target event codes, for order-independent set comparison.
    pub fn target_codes(&self) -> HashSet<&str> {
        self.target_events.iter().map(|e| e.code.as_str()).collect()
    }

    /// All (year, state) partitions a scan covers, in year-major order.
    pub fn partitions(&self) -> Vec<Partition> {
        let mut out = Vec::with_capacity(self.years.len() * self.states.len());
        for year in &self.years {
            for state in &self.states {
                out.push(Partition { year: *year, state: state.clone() });
            }
        }
        out
    }

    /// Results page for a meet.
    pub fn results_url(&self, meet_id: &str) -> String {
        format!("{}/{}/results", self.results_url_base, meet_id)
    }

    /// Reject configurations the detector cannot work with.
    pub fn validate(&self) -> ScanResult<()> {
        if self.target_events.len() != 3 {
            return Err(ScanError::Message(format!(
                "target set must hold exactly 3 events, got {}",
                self.target_events.len()
            )));
        }
        if self.target_codes().len() != self.target_events.len() {
            return Err(ScanError::Message("target event codes must be distinct".to_string()));
        }
        if self.years.is_empty() || self.states.is_empty() {
            return Err(ScanError::Message("years and states must be non-empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = ScanConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.target_events.len(), 3);
    }

    #[test]
    fn test_partitions_cover_year_state_product() {
        let cfg = ScanConfig {
            years: vec![2024, 2025],
            states: vec!["NY".to_string(), "NJ".to_string()],
            ..ScanConfig::default()
        };
        let parts = cfg.partitions();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], Partition { year: 2024, state: "NY".to_string() });
        assert_eq!(parts[3], Partition { year: 2025, state: "NJ".to_string() });
    }

    #[test]
    fn test_results_url() {
        let cfg = ScanConfig::default();
        assert_eq!(
            cfg.results_url("12345"),
            "https://www.athletic.net/TrackAndField/meet/12345/results"
        );
    }

    #[test]
    fn test_validate_rejects_wrong_event_count() {
        let mut cfg = ScanConfig::default();
        cfg.target_events.pop();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_codes() {
        let mut cfg = ScanConfig::default();
        cfg.target_events[2].code = cfg.target_events[0].code.clone();
        assert!(cfg.validate().is_err());
    }
}
