use keyspace_analysis_shared_kernel::{DatabaseId, DomainError, DomainResult};

use crate::grouping::{Delimiters, KeyGrouper};

/// Domain representation of resolved analysis options.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub delimiters: Delimiters,
    /// Databases to analyse; empty means every database the store reports.
    pub databases: Vec<DatabaseId>,
    /// Number of largest groups echoed per database after the run.
    pub top_n: Option<usize>,
}

impl AnalysisConfig {
    pub fn new(delimiters: Delimiters, databases: Vec<DatabaseId>, top_n: Option<usize>) -> DomainResult<Self> {
        if top_n == Some(0) {
            return Err(DomainError::RangeValidation {
                field: "top".into(),
                min: "1".into(),
                max: usize::MAX.to_string(),
            });
        }
        Ok(Self { delimiters, databases, top_n })
    }

    pub fn grouper(&self) -> KeyGrouper {
        KeyGrouper::new(self.delimiters.clone())
    }

    /// Whether `db` is part of this run.
    pub fn selects(&self, db: DatabaseId) -> bool {
        self.databases.is_empty() || self.databases.contains(&db)
    }
}
