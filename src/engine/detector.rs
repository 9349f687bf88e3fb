//! Triple detection: exact event-set match with run-wide dedup.

use std::collections::HashSet;

use tracing::info;

use crate::core::config::{Partition, ScanConfig};
use crate::core::schema::{Meet, MeetInfo, Triple};
use crate::engine::grouper::group_by_athlete;

/// Detects athletes whose distinct event codes at a meet exactly match the
/// configured target set.
///
/// The detector owns the accumulating list of qualifying records and the
/// seen (meet id, athlete id) keys for the whole run. Overlapping source
/// partitions can surface the same meet twice; the first detection wins and
/// later ones are dropped silently.
pub struct TripleDetector<'a> {
    config: &'a ScanConfig,
    seen: HashSet<(String, String)>,
    triples: Vec<Triple>,
}

impl<'a> TripleDetector<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        TripleDetector { config, seen: HashSet::new(), triples: Vec::new() }
    }

    /// Scan one meet, appending any newly qualifying records.
    ///
    /// Returns the number of records appended.
    pub fn scan_meet(&mut self, meet: &Meet, partition: &Partition) -> usize {
        let target = self.config.target_codes();
        let mut appended = 0;

        for group in group_by_athlete(meet) {
            let codes: HashSet<&str> =
                group.performances.iter().map(|p| p.event_code.as_str()).collect();
            if codes != target {
                continue;
            }

            let key = (meet.id.clone(), group.athlete_id.to_string());
            if self.seen.contains(&key) {
                continue;
            }
            self.seen.insert(key);

            let performances: Vec<_> =
                group.performances.iter().map(|p| (*p).clone()).collect();
            self.notify(meet, partition, &performances);

            self.triples.push(Triple::new(
                partition.clone(),
                MeetInfo::from(meet),
                group.athlete_id.to_string(),
                performances,
            ));
            appended += 1;
        }

        appended
    }

    /// Human-readable detection notice. Observability only; the persisted
    /// record is the contract.
    fn notify(&self, meet: &Meet, partition: &Partition, performances: &[crate::Performance]) {
        let first = &performances[0];
        let marks: Vec<&str> = performances.iter().map(|p| p.mark.as_str()).collect();
        info!(
            "triple: {} ({}) at {} {} [{}] marks={:?} {}",
            first.display_name(),
            first.gender,
            meet.date,
            meet.name,
            partition,
            marks,
            self.config.results_url(&meet.id),
        );
    }

    /// Number of qualifying records accumulated so far.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate the accumulated records in detection order.
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Consume the detector, yielding the accumulated records.
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }
}
