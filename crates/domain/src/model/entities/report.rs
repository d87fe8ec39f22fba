use keyspace_analysis_shared_kernel::ByteSize;
use serde::{Deserialize, Serialize};

/// Aggregated figures for one key family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub group_key: String,
    pub count: u64,
    pub size: ByteSize,
    /// Reserved; always zero.
    pub never_expire: u64,
    /// Reserved; always zero.
    pub avg_ttl: u64,
}

impl Report {
    /// A group holding its first observed key.
    pub fn first(group_key: impl Into<String>, size: ByteSize) -> Self {
        Self { group_key: group_key.into(), count: 1, size, never_expire: 0, avg_ttl: 0 }
    }

    /// Folds one more key of `size` into the group.
    pub fn absorb(&mut self, size: ByteSize) {
        self.count = self.count.saturating_add(1);
        self.size += size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_starts_count_at_one() {
        let report = Report::first("user:*", ByteSize::new(7));
        assert_eq!(report.count, 1);
        assert_eq!(report.size.bytes(), 7);
        assert_eq!((report.never_expire, report.avg_ttl), (0, 0));
    }

    #[test]
    fn absorb_accumulates() {
        let mut report = Report::first("user:*", ByteSize::new(7));
        report.absorb(ByteSize::zero());
        report.absorb(ByteSize::new(3));
        assert_eq!(report.count, 3);
        assert_eq!(report.size.bytes(), 10);
    }
}
