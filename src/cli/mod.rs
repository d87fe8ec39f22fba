pub mod args;
pub mod parsers;
pub mod value_enum;

use std::time::Duration;

pub use args::Args;
use clap::Parser;
use keyspace_analysis_domain::{config::AnalysisConfig, grouping::Delimiters};
use keyspace_analysis_infra::store::ConnectionSettings;
use keyspace_analysis_shared_kernel::{KeyspaceAnalysisError, PresentationError, Result};

use crate::config::AppConfig;

const URL_SCHEMES: [&str; 3] = ["redis://", "rediss://", "redis+unix://"];

fn validate_args(args: &Args) -> Result<()> {
    if args.url.is_none() && args.port == 0 {
        return Err(invalid("--port", "0", "must be between 1 and 65535"));
    }
    if args.timeout == 0 {
        return Err(invalid("--timeout", "0", "must be at least 1"));
    }
    if let Some(url) = &args.url {
        if !URL_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
            return Err(invalid("--url", url, "expected a redis:// URL"));
        }
    }
    Ok(())
}

fn invalid(flag: &str, value: &str, reason: &str) -> KeyspaceAnalysisError {
    PresentationError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Every `-d` value in command line order, empty entries dropped.
fn make_delimiters(args: &Args) -> Delimiters {
    Delimiters::new(args.delimiters.iter().filter(|d| !d.is_empty()).cloned())
}

fn make_connection_settings(args: &Args) -> ConnectionSettings {
    ConnectionSettings {
        host: args.host.clone(),
        port: args.port,
        password: args.password.clone().filter(|p| !p.is_empty()),
        url: args.url.clone(),
        read_timeout: Duration::from_secs(args.timeout),
        scan_count: args.scan_count,
        estimate: args.estimate.into(),
    }
}

/// Parse CLI arguments and build the run configuration.
///
/// # Errors
///
/// Returns `Err` if argument validation fails.
pub fn load_config() -> Result<AppConfig> {
    let args = Args::parse();
    build_config(&args)
}

/// Convert parsed CLI arguments into a run configuration.
///
/// # Errors
///
/// Returns `Err` when argument validation fails or when the analysis options
/// are rejected by the domain.
pub fn build_config(args: &Args) -> Result<AppConfig> {
    validate_args(args)?;

    let analysis = AnalysisConfig::new(make_delimiters(args), args.databases.clone(), args.top)
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))?;

    Ok(AppConfig {
        analysis,
        connection: make_connection_settings(args),
        folder: args.folder.clone(),
        format: args.format.into(),
        verbose: args.verbose,
    })
}
