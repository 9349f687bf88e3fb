//! Triple record schema v1 - canonical schema for persisted scan outputs.

use serde::{Deserialize, Serialize};

use super::config::Partition;

/// Schema version for forward compatibility
pub const SCHEMA_VERSION: u32 = 1;

/// One athlete's result in one event at one meet.
///
/// Field names mirror the source feed (camelCase). Immutable once ingested;
/// the engine only reads these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub id: String,
    pub meet_id: String,
    pub meet_name: String,
    pub team_name: String,
    pub athlete_id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub event_code: String,
    /// Raw mark string in source-specific format.
    pub mark: String,
}

impl Performance {
    /// Display name as rendered in output rows.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One meet and its performance list, as delivered by a partition source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meet {
    pub id: String,
    pub date: String,
    pub name: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub performances: Vec<Performance>,
}

/// Meet metadata carried into a `Triple` without the full performance list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetInfo {
    pub id: String,
    pub date: String,
    pub name: String,
    #[serde(default)]
    pub venue: String,
}

impl From<&Meet> for MeetInfo {
    fn from(meet: &Meet) -> Self {
        MeetInfo {
            id: meet.id.clone(),
            date: meet.date.clone(),
            name: meet.name.clone(),
            venue: meet.venue.clone(),
        }
    }
}

/// Canonical qualifying record - one athlete covering the exact target event
/// set at one meet.
///
/// The performance list holds everything the athlete did at that meet in the
/// target events, which may exceed three entries when an event ran in
/// multiple rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Triple {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// ISO 8601 timestamp of the detecting scan
    pub scanned_at: String,

    /// Partition the detection came from
    pub partition: Partition,

    /// Meet metadata snapshot
    pub meet: MeetInfo,

    /// Athlete identifier within the source feed
    pub athlete_id: String,

    /// The athlete's full performance list at this meet
    pub performances: Vec<Performance>,
}

impl Triple {
    /// Create a new Triple stamped with the current time.
    pub fn new(
        partition: Partition,
        meet: MeetInfo,
        athlete_id: String,
        performances: Vec<Performance>,
    ) -> Self {
        let scanned_at = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default();
        Triple {
            schema_version: SCHEMA_VERSION,
            scanned_at,
            partition,
            meet,
            athlete_id,
            performances,
        }
    }

    /// Dedup key: one Triple per (meet id, athlete id) across the whole run.
    pub fn key(&self) -> (String, String) {
        (self.meet.id.clone(), self.athlete_id.clone())
    }
}

/// Final fixed-column output row.
///
/// `marks` holds one resolved mark per target event, in configured order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripleRow {
    pub name: String,
    pub gender: String,
    pub meet_name: String,
    pub date: String,
    pub year: u16,
    pub url: String,
    pub marks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_performance(event: &str, mark: &str) -> Performance {
        Performance {
            id: "p1".to_string(),
            meet_id: "m1".to_string(),
            meet_name: "Invitational".to_string(),
            team_name: "Central HS".to_string(),
            athlete_id: "a1".to_string(),
            first_name: "Dana".to_string(),
            last_name: "Reyes".to_string(),
            gender: "F".to_string(),
            event_code: event.to_string(),
            mark: mark.to_string(),
        }
    }

    #[test]
    fn test_performance_deserializes_camel_case() {
        let json = r#"{
            "id": "1", "meetId": "42", "meetName": "Relays", "teamName": "North",
            "athleteId": "7", "firstName": "Sam", "lastName": "Okafor",
            "gender": "M", "eventCode": "800m", "mark": "2:04.55"
        }"#;
        let p: Performance = serde_json::from_str(json).unwrap();
        assert_eq!(p.meet_id, "42");
        assert_eq!(p.event_code, "800m");
        assert_eq!(p.display_name(), "Sam Okafor");
    }

    #[test]
    fn test_triple_round_trips_through_json() {
        let triple = Triple::new(
            Partition { year: 2025, state: "NY".to_string() },
            MeetInfo {
                id: "m1".to_string(),
                date: "2025-05-10".to_string(),
                name: "Invitational".to_string(),
                venue: "Icahn Stadium".to_string(),
            },
            "a1".to_string(),
            vec![make_performance("400H", "58.21")],
        );

        let json = serde_json::to_string(&triple).unwrap();
        let back: Triple = serde_json::from_str(&json).unwrap();
        assert_eq!(back.schema_version, SCHEMA_VERSION);
        assert_eq!(back.key(), ("m1".to_string(), "a1".to_string()));
        assert_eq!(back.performances.len(), 1);
        assert_eq!(back.partition.year, 2025);
    }

    #[test]
    fn test_meet_tolerates_missing_venue() {
        let json = r#"{"id": "m2", "date": "2025-04-01", "name": "Dual", "performances": []}"#;
        let meet: Meet = serde_json::from_str(json).unwrap();
        assert_eq!(meet.venue, "");
        assert!(meet.performances.is_empty());
    }
}
