// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::model::Report;

/// Orders reports largest first.
pub struct ReportSorter;

impl ReportSorter {
    /// Returns `reports` sorted by size (desc), then group key (asc).
    pub fn sort(mut reports: Vec<Report>) -> Vec<Report> {
        Self::sort_in_place(&mut reports);
        reports
    }

    pub fn sort_in_place(reports: &mut [Report]) {
        reports.sort_by(Self::compare);
    }

    /// Size descending. Equal sizes fall back to the group key so the
    /// output does not depend on hash map iteration order.
    #[inline]
    pub fn compare(a: &Report, b: &Report) -> Ordering {
        b.size.cmp(&a.size).then_with(|| a.group_key.cmp(&b.group_key))
    }
}
