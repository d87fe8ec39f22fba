use std::path::PathBuf;

use clap::{ArgAction, Parser};
use keyspace_analysis_shared_kernel::DatabaseId;

use super::{
    parsers::{parse_positive_u64, parse_positive_usize},
    value_enum::{CliEstimate, CliOutputFormat},
};

#[derive(Parser, Debug)]
#[command(
    name = "keyspace-analysis",
    version,
    about = "Groups keys of a Redis instance by prefix and reports their estimated size"
)]
pub struct Args {
    /// Server host
    #[arg(long, default_value = "127.0.0.1", conflicts_with = "url")]
    pub host: String,

    /// Server port
    #[arg(short = 'p', long, default_value_t = 6379, conflicts_with = "url")]
    pub port: u16,

    /// Server password
    #[arg(short = 'a', long, conflicts_with = "url")]
    pub password: Option<String>,

    /// Connection URL (redis://[user:password@]host:port); replaces --host, --port and --password
    #[arg(long)]
    pub url: Option<String>,

    /// Read timeout in seconds for every command
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,

    /// Prefix delimiters, comma separated and repeatable; tried in the order given
    #[arg(short = 'd', long, value_delimiter = ',', action = ArgAction::Append, default_value = ":")]
    pub delimiters: Vec<String>,

    /// Restrict the run to these databases (repeatable, e.g. --db 0 --db db3)
    #[arg(long = "db", value_name = "DB")]
    pub databases: Vec<DatabaseId>,

    /// Fixed COUNT for every SCAN call
    #[arg(long, value_parser = parse_positive_u64)]
    pub scan_count: Option<u64>,

    /// How the size of a key is estimated
    #[arg(long, value_enum, default_value = "serialized-length")]
    pub estimate: CliEstimate,

    /// Folder receiving one report file per database
    #[arg(short = 'o', long, default_value = "reports")]
    pub folder: PathBuf,

    /// Report file format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: CliOutputFormat,

    /// Print the N largest groups of each database
    #[arg(long, value_parser = parse_positive_usize)]
    pub top: Option<usize>,

    /// Debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
