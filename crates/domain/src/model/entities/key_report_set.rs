use std::collections::{HashMap, hash_map::Entry};

use keyspace_analysis_shared_kernel::ByteSize;

use super::Report;

/// Unordered group-key → report map for a single database pass.
#[derive(Debug, Clone, Default)]
pub struct KeyReportSet {
    groups: HashMap<String, Report>,
}

impl KeyReportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one key of `size` under `group_key`.
    pub fn accumulate(&mut self, group_key: String, size: ByteSize) {
        match self.groups.entry(group_key) {
            Entry::Occupied(mut slot) => slot.get_mut().absorb(size),
            Entry::Vacant(slot) => {
                let report = Report::first(slot.key().clone(), size);
                slot.insert(report);
            }
        }
    }

    pub fn get(&self, group_key: &str) -> Option<&Report> {
        self.groups.get(group_key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drains the set in no particular order.
    pub fn into_reports(self) -> Vec<Report> {
        self.groups.into_values().collect()
    }
}
