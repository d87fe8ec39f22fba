// crates/infra/src/progress.rs
use keyspace_analysis_ports::progress::ProgressSink;
use keyspace_analysis_shared_kernel::{DatabaseId, KeyCountHint};
use log::info;

/// Reports pass progress through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_database(&self, db: DatabaseId, hint: KeyCountHint) {
        info!("analyzing {db} (~{} keys)", hint.value());
    }

    fn on_database_done(&self, db: DatabaseId, keys: usize, groups: usize) {
        info!("{db}: {keys} keys folded into {groups} groups");
    }

    fn on_complete(&self, databases: usize) {
        info!("analysis finished for {databases} database(s)");
    }
}
