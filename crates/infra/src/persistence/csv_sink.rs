use std::{io::Write, path::PathBuf};

use keyspace_analysis_domain::model::{Report, ReportSet};
use keyspace_analysis_ports::sink::ReportSink;
use keyspace_analysis_shared_kernel::{ErrorContext, Result};
use log::info;

use super::{FileWriter, OutputFormat, ensure_folder, report_path};

/// Writes `Key,Count,Size` files, one per database.
pub struct CsvReportSink {
    folder: PathBuf,
    instance: String,
}

impl CsvReportSink {
    pub fn new(folder: impl Into<PathBuf>, instance: impl Into<String>) -> Self {
        Self { folder: folder.into(), instance: instance.into() }
    }
}

impl ReportSink for CsvReportSink {
    fn save(&self, reports: &ReportSet) -> Result<()> {
        ensure_folder(&self.folder)?;
        for (db, rows) in reports.iter() {
            let path = report_path(&self.folder, &self.instance, db, OutputFormat::Csv);
            let mut buf = Vec::new();
            write_csv(rows, &mut buf)?;
            FileWriter::atomic_write(&path, &buf).with_context(|| format!("saving report of {db}"))?;
            info!("{db}: {} groups written to {}", rows.len(), path.display());
        }
        Ok(())
    }
}

pub fn write_csv(reports: &[Report], out: &mut impl Write) -> Result<()> {
    writeln!(out, "Key,Count,Size")?;
    for report in reports {
        writeln!(out, "{},{},{}", escape_field(&report.group_key), report.count, report.size.to_scaled())?;
    }
    Ok(())
}

fn escape_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}
