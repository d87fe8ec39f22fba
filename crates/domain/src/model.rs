pub mod entities;
pub mod value_objects;

pub use entities::{KeyReportSet, Report, ReportSet};
pub use value_objects::Summary;
