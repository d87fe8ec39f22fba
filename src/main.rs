// src/main.rs
use std::process::ExitCode;

use anyhow::Result;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let config = keyspace_analysis::load_config()?;
    keyspace_analysis::setup_logging(config.verbose);
    keyspace_analysis::run(config)
}
