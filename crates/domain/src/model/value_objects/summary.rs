use keyspace_analysis_shared_kernel::ByteSize;

use crate::model::Report;

/// Totals over the reports of one database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub groups: usize,
    pub keys: u64,
    pub size: ByteSize,
}

impl Summary {
    pub fn from_reports(reports: &[Report]) -> Self {
        let (keys, size) = reports
            .iter()
            .fold((0_u64, ByteSize::zero()), |(k, s), r| (k.saturating_add(r.count), s + r.size));
        Self { groups: reports.len(), keys, size }
    }
}
