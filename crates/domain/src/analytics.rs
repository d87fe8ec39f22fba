mod aggregate;
mod sort;

pub use aggregate::Aggregator;
pub use sort::ReportSorter;
