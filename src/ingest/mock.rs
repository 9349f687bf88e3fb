//! In-memory meet source for tests.

use std::collections::HashMap;

use super::MeetSource;
use crate::ScanResult;
use crate::core::config::Partition;
use crate::core::schema::Meet;

/// Serves canned partition data from memory.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    partitions: HashMap<Partition, Vec<Meet>>,
}

impl MockSource {
    pub fn new() -> Self {
        MockSource::default()
    }

    /// Add a partition's meets, builder style.
    pub fn with_partition(mut self, partition: Partition, meets: Vec<Meet>) -> Self {
        self.partitions.insert(partition, meets);
        self
    }
}

impl MeetSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn load(&self, partition: &Partition) -> ScanResult<Option<Vec<Meet>>> {
        Ok(self.partitions.get(partition).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_partition_is_none() {
        let source = MockSource::new();
        let partition = Partition { year: 2025, state: "NY".to_string() };
        assert!(source.load(&partition).unwrap().is_none());
    }

    #[test]
    fn test_known_partition_returns_meets() {
        let partition = Partition { year: 2025, state: "NY".to_string() };
        let meet = Meet {
            id: "m1".to_string(),
            date: "2025-05-10".to_string(),
            name: "Invitational".to_string(),
            venue: String::new(),
            performances: vec![],
        };
        let source = MockSource::new().with_partition(partition.clone(), vec![meet]);

        let meets = source.load(&partition).unwrap().unwrap();
        assert_eq!(meets.len(), 1);
        assert_eq!(meets[0].id, "m1");
    }
}
