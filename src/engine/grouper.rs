//! Per-meet partition of performances by athlete.

use std::collections::HashMap;

use crate::core::schema::{Meet, Performance};

/// One athlete's performances within a single meet, in source order.
#[derive(Debug)]
pub struct AthleteGroup<'a> {
    pub athlete_id: &'a str,
    pub performances: Vec<&'a Performance>,
}

/// Partition a meet's performance list by athlete id.
///
/// Groups appear in first-seen athlete order and each group keeps the
/// source's insertion order. Pure pass-through: nothing is filtered or
/// deduplicated here.
pub fn group_by_athlete(meet: &Meet) -> Vec<AthleteGroup<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<AthleteGroup<'_>> = Vec::new();

    for perf in &meet.performances {
        match index.get(perf.athlete_id.as_str()) {
            Some(&i) => groups[i].performances.push(perf),
            None => {
                index.insert(perf.athlete_id.as_str(), groups.len());
                groups.push(AthleteGroup {
                    athlete_id: perf.athlete_id.as_str(),
                    performances: vec![perf],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_performance(athlete: &str, event: &str, mark: &str) -> Performance {
        Performance {
            id: format!("{athlete}-{event}"),
            meet_id: "m1".to_string(),
            meet_name: "Invitational".to_string(),
            team_name: "Central HS".to_string(),
            athlete_id: athlete.to_string(),
            first_name: "Test".to_string(),
            last_name: athlete.to_string(),
            gender: "F".to_string(),
            event_code: event.to_string(),
            mark: mark.to_string(),
        }
    }

    fn make_meet(performances: Vec<Performance>) -> Meet {
        Meet {
            id: "m1".to_string(),
            date: "2025-05-10".to_string(),
            name: "Invitational".to_string(),
            venue: String::new(),
            performances,
        }
    }

    #[test]
    fn test_groups_interleaved_athletes() {
        let meet = make_meet(vec![
            make_performance("a1", "400H", "58.21"),
            make_performance("a2", "800m", "2:01.00"),
            make_performance("a1", "800m", "2:04.55"),
            make_performance("a2", "HJ", "1.80"),
            make_performance("a1", "HJ", "1.75"),
        ]);

        let groups = group_by_athlete(&meet);
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].athlete_id, "a1");
        let codes: Vec<&str> =
            groups[0].performances.iter().map(|p| p.event_code.as_str()).collect();
        assert_eq!(codes, vec!["400H", "800m", "HJ"]);

        assert_eq!(groups[1].athlete_id, "a2");
        assert_eq!(groups[1].performances.len(), 2);
    }

    #[test]
    fn test_identical_performances_pass_through() {
        let meet = make_meet(vec![
            make_performance("a1", "800m", "2:04.55"),
            make_performance("a1", "800m", "2:04.55"),
        ]);

        let groups = group_by_athlete(&meet);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].performances.len(), 2);
    }

    #[test]
    fn test_empty_meet_yields_no_groups() {
        let meet = make_meet(vec![]);
        assert!(group_by_athlete(&meet).is_empty());
    }
}
