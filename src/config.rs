use std::path::PathBuf;

use keyspace_analysis_domain::config::AnalysisConfig;
use keyspace_analysis_infra::{persistence::OutputFormat, store::ConnectionSettings};

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub connection: ConnectionSettings,
    pub folder: PathBuf,
    pub format: OutputFormat,
    pub verbose: bool,
}
