use std::collections::BTreeMap;
use std::fmt;

pub const RESOURCES_WITH_EXPIRY: &str = "resources-with-expiry";
pub const RESOURCES_DELETED: &str = "resources-deleted";
pub const RESOURCES_DELETE_FAILED: &str = "resources-delete-failed";

/// Outcome counters of a single sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    counts: BTreeMap<&'static str, u64>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, label: &'static str) {
        *self.counts.entry(label).or_insert(0) += 1;
    }

    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn merge(&mut self, other: RunSummary) {
        for (label, count) in other.counts {
            *self.counts.entry(label).or_insert(0) += count;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.counts.iter().map(|(label, count)| (*label, *count))
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.counts.is_empty() {
            return write!(f, "none");
        }
        let stats: Vec<String> = self
            .iter()
            .map(|(label, count)| format!("{}={}", label, count))
            .collect();
        write!(f, "{}", stats.join(", "))
    }
}
