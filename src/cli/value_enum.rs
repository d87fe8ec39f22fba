use clap::ValueEnum;
use keyspace_analysis_infra::{persistence::OutputFormat, store::EstimateMode};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Csv,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Csv => OutputFormat::Csv,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliEstimate {
    /// `DEBUG OBJECT` serialized length
    SerializedLength,
    /// `MEMORY USAGE`
    MemoryUsage,
}

impl From<CliEstimate> for EstimateMode {
    fn from(value: CliEstimate) -> Self {
        match value {
            CliEstimate::SerializedLength => EstimateMode::SerializedLength,
            CliEstimate::MemoryUsage => EstimateMode::MemoryUsage,
        }
    }
}
