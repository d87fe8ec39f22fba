mod key_report_set;
mod report;
mod report_set;

pub use key_report_set::KeyReportSet;
pub use report::Report;
pub use report_set::ReportSet;
