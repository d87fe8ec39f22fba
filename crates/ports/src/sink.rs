// crates/ports/src/sink.rs
use keyspace_analysis_domain::model::ReportSet;
use keyspace_analysis_shared_kernel::Result;

/// Port for writing a finished report set somewhere durable.
pub trait ReportSink {
    fn save(&self, reports: &ReportSet) -> Result<()>;
}
