use keyspace_analysis_domain::model::ReportSet;
use keyspace_analysis_shared_kernel::DatabaseId;

/// Result of one analysis run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOutcome {
    pub reports: ReportSet,
    /// Keys whose size could not be estimated and were counted as zero bytes.
    pub unavailable_estimates: u64,
    /// Databases whose keys could not be listed; each has an empty report.
    pub failed_databases: Vec<DatabaseId>,
}

impl AnalysisOutcome {
    pub fn is_degraded(&self) -> bool {
        self.unavailable_estimates > 0 || !self.failed_databases.is_empty()
    }
}
