mod csv_sink;
mod file_writer;
mod json_sink;

use std::path::{Path, PathBuf};

use keyspace_analysis_ports::sink::ReportSink;
use keyspace_analysis_shared_kernel::{DatabaseId, InfrastructureError, Result};

pub use csv_sink::{CsvReportSink, write_csv};
pub use file_writer::FileWriter;
pub use json_sink::{JsonReportSink, write_json};

/// File format of the saved reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Sink writing one file per database under `folder`.
    pub fn sink(self, folder: impl Into<PathBuf>, instance: impl Into<String>) -> Box<dyn ReportSink> {
        match self {
            Self::Csv => Box::new(CsvReportSink::new(folder, instance)),
            Self::Json => Box::new(JsonReportSink::new(folder, instance)),
        }
    }
}

/// `<folder>/redis-analysis-<instance>-<db>.<ext>`
pub fn report_path(folder: &Path, instance: &str, db: DatabaseId, format: OutputFormat) -> PathBuf {
    folder.join(format!("redis-analysis-{instance}-{}.{}", db.index(), format.extension()))
}

fn ensure_folder(folder: &Path) -> Result<()> {
    std::fs::create_dir_all(folder).map_err(|source| {
        InfrastructureError::FileSystemOperation {
            operation: "create directory".into(),
            path: folder.to_path_buf(),
            source,
        }
        .into()
    })
}
