use std::io::Write;

use keyspace_analysis_domain::model::Summary;
use keyspace_analysis_usecase::AnalysisOutcome;

/// Console summary printed after the reports are saved.
///
/// One line per database, followed by its `top` largest groups when requested.
pub fn write_summary(outcome: &AnalysisOutcome, top: Option<usize>, out: &mut impl Write) -> std::io::Result<()> {
    for (db, reports) in outcome.reports.iter() {
        let summary = Summary::from_reports(reports);
        let failed = if outcome.failed_databases.contains(&db) { " (listing failed)" } else { "" };
        writeln!(
            out,
            "{db}: {} keys in {} groups, {:#}{failed}",
            summary.keys, summary.groups, summary.size
        )?;

        if let Some(n) = top {
            for report in reports.iter().take(n) {
                writeln!(out, "  {:>12}  {:>8}  {}", report.size.to_scaled().to_string(), report.count, report.group_key)?;
            }
        }
    }

    if outcome.unavailable_estimates > 0 {
        writeln!(out, "{} key(s) had no size estimate and were counted as 0 bytes", outcome.unavailable_estimates)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use keyspace_analysis_domain::model::{Report, ReportSet};
    use keyspace_analysis_shared_kernel::{ByteSize, DatabaseId};

    use super::*;

    fn outcome() -> AnalysisOutcome {
        let session = Report { count: 2, ..Report::first("session:a:*", ByteSize::new(300)) };
        let cache = Report::first("cache:*", ByteSize::new(50));
        let reports: ReportSet =
            [(DatabaseId::new(0), vec![session, cache]), (DatabaseId::new(2), vec![])].into_iter().collect();
        AnalysisOutcome { reports, unavailable_estimates: 0, failed_databases: vec![DatabaseId::new(2)] }
    }

    #[test]
    fn one_line_per_database() {
        let mut out = Vec::new();
        write_summary(&outcome(), None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("db0: 3 keys in 2 groups, "));
        assert!(lines[1].ends_with("(listing failed)"));
    }

    #[test]
    fn top_rows_follow_report_order() {
        let mut out = Vec::new();
        write_summary(&outcome(), Some(1), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("session:a:*"));
        assert!(!text.contains("cache:*"));
    }

    #[test]
    fn mentions_missing_estimates() {
        let mut outcome = outcome();
        outcome.unavailable_estimates = 4;
        let mut out = Vec::new();
        write_summary(&outcome, None, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("4 key(s) had no size estimate"));
    }
}
