use std::io::{self, Write};

use anyhow::{Context, Result};
use keyspace_analysis_infra::{progress::LogProgress, store::RedisKeyspace};
use keyspace_analysis_ports::sink::ReportSink;
use keyspace_analysis_usecase::RunAnalysis;
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{config::AppConfig, presentation::write_summary};

/// Installs the stderr subscriber. `RUST_LOG` wins over `verbose`.
pub fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("keyspace_analysis=debug,warn")
        } else {
            EnvFilter::new("keyspace_analysis=info,warn")
        }
    });

    // A second install (tests, embedding) is not an error worth failing on.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Connects, analyses the selected databases, saves one report per database
/// and prints the console summary.
pub fn run(config: AppConfig) -> Result<()> {
    let instance = config.connection.instance_label();
    let address = config.connection.address();
    let keyspace =
        RedisKeyspace::connect(config.connection).with_context(|| format!("cannot connect to {address}"))?;

    info!("starting analysis of {address}");
    let progress = LogProgress;
    let outcome = RunAnalysis::new(&keyspace, &keyspace)
        .with_progress(&progress)
        .execute(&config.analysis)
        .context("analysis failed")?;

    info!("saving the results of the analysis into {}", config.folder.display());
    config
        .format
        .sink(&config.folder, instance)
        .save(&outcome.reports)
        .with_context(|| format!("cannot save reports into {}", config.folder.display()))?;

    if outcome.is_degraded() {
        warn!(
            "{} key(s) without size estimate, {} database(s) not listed",
            outcome.unavailable_estimates,
            outcome.failed_databases.len()
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&outcome, config.analysis.top_n, &mut out)?;
    out.flush()?;
    Ok(())
}
