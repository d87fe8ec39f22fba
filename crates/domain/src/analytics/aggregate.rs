use keyspace_analysis_shared_kernel::ByteSize;

use crate::{
    analytics::ReportSorter,
    grouping::KeyGrouper,
    model::{KeyReportSet, Report},
};

/// Folds the `(key, size)` observations of one database into key families.
///
/// Each pass owns its own [`KeyReportSet`]; nothing is shared between
/// databases, so separate passes may run on separate threads.
pub struct Aggregator<'a> {
    grouper: &'a KeyGrouper,
    groups: KeyReportSet,
}

impl<'a> Aggregator<'a> {
    pub fn new(grouper: &'a KeyGrouper) -> Self {
        Self { grouper, groups: KeyReportSet::new() }
    }

    /// Consumes one observation. Must be called in the order keys are supplied.
    pub fn accumulate(&mut self, key: &str, size: ByteSize) {
        let group_key = self.grouper.group_of(key);
        self.groups.accumulate(group_key, size);
    }

    pub fn accumulate_all<'k, I>(&mut self, observations: I)
    where
        I: IntoIterator<Item = (&'k str, ByteSize)>,
    {
        for (key, size) in observations {
            self.accumulate(key, size);
        }
    }

    pub fn groups(&self) -> &KeyReportSet {
        &self.groups
    }

    pub fn into_groups(self) -> KeyReportSet {
        self.groups
    }

    /// Converts the accumulated groups into a size-descending sequence.
    pub fn finish(self) -> Vec<Report> {
        ReportSorter::sort(self.groups.into_reports())
    }
}
