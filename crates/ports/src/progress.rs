// crates/ports/src/progress.rs
use keyspace_analysis_shared_kernel::{DatabaseId, KeyCountHint};

pub trait ProgressSink: Send + Sync {
    fn on_database(&self, db: DatabaseId, hint: KeyCountHint);
    fn on_database_done(&self, db: DatabaseId, keys: usize, groups: usize);
    fn on_complete(&self, databases: usize);
}
