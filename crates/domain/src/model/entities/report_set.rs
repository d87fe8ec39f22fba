use std::collections::BTreeMap;

use keyspace_analysis_shared_kernel::DatabaseId;
use serde::Serialize;

use super::Report;

/// Sorted reports of every analysed database, keyed by database index.
///
/// Produced once per analysis run and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReportSet {
    databases: BTreeMap<DatabaseId, Vec<Report>>,
}

impl ReportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the sorted sequence of `db`, replacing any earlier one.
    pub fn insert(&mut self, db: DatabaseId, reports: Vec<Report>) {
        self.databases.insert(db, reports);
    }

    pub fn get(&self, db: DatabaseId) -> Option<&[Report]> {
        self.databases.get(&db).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.databases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
    }

    /// Iterates databases in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (DatabaseId, &[Report])> {
        self.databases.iter().map(|(db, reports)| (*db, reports.as_slice()))
    }
}

impl FromIterator<(DatabaseId, Vec<Report>)> for ReportSet {
    fn from_iter<T: IntoIterator<Item = (DatabaseId, Vec<Report>)>>(iter: T) -> Self {
        Self { databases: iter.into_iter().collect() }
    }
}
