use std::{io::Write, path::PathBuf};

use keyspace_analysis_domain::model::{Report, ReportSet};
use keyspace_analysis_ports::sink::ReportSink;
use keyspace_analysis_shared_kernel::{ErrorContext, Result};
use log::info;
use serde::Serialize;

use super::{FileWriter, OutputFormat, ensure_folder, report_path};

/// Writes a pretty-printed JSON array per database.
pub struct JsonReportSink {
    folder: PathBuf,
    instance: String,
}

impl JsonReportSink {
    pub fn new(folder: impl Into<PathBuf>, instance: impl Into<String>) -> Self {
        Self { folder: folder.into(), instance: instance.into() }
    }
}

#[derive(Serialize)]
struct JsonRow<'a> {
    key: &'a str,
    count: u64,
    size: u64,
    size_human: String,
}

impl ReportSink for JsonReportSink {
    fn save(&self, reports: &ReportSet) -> Result<()> {
        ensure_folder(&self.folder)?;
        for (db, rows) in reports.iter() {
            let path = report_path(&self.folder, &self.instance, db, OutputFormat::Json);
            let mut buf = Vec::new();
            write_json(rows, &mut buf)?;
            FileWriter::atomic_write(&path, &buf).with_context(|| format!("saving report of {db}"))?;
            info!("{db}: {} groups written to {}", rows.len(), path.display());
        }
        Ok(())
    }
}

pub fn write_json(reports: &[Report], out: &mut impl Write) -> Result<()> {
    let rows: Vec<JsonRow<'_>> = reports
        .iter()
        .map(|r| JsonRow {
            key: &r.group_key,
            count: r.count,
            size: r.size.bytes(),
            size_human: r.size.to_scaled().to_string(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use keyspace_analysis_shared_kernel::ByteSize;

    use super::*;

    #[test]
    fn serializes_rows_in_order() {
        let reports = vec![Report::first("big:*", ByteSize::new(4096)), Report::first("small", ByteSize::new(1))];
        let mut out = Vec::new();
        write_json(&reports, &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["key"], "big:*");
        assert_eq!(parsed[0]["size"], 4096);
        assert_eq!(parsed[0]["size_human"], "4.000 KB");
        assert_eq!(parsed[1]["count"], 1);
    }
}
