// crates/ports/src/keyspace.rs
use std::collections::BTreeMap;

use keyspace_analysis_shared_kernel::{ByteSize, DatabaseId, KeyCountHint, Result};

/// Logical databases of a store and the key count each one reports.
pub type DatabaseCatalog = BTreeMap<DatabaseId, KeyCountHint>;

/// Port for enumerating the keyspace of a store instance.
pub trait KeySource {
    /// Databases holding at least one key.
    fn databases(&self) -> Result<DatabaseCatalog>;

    /// Every key of `db`, in the order the store returns them.
    ///
    /// `hint` sizes the enumeration but does not bound it.
    fn keys(&self, db: DatabaseId, hint: KeyCountHint) -> Result<Vec<String>>;
}

/// Port for estimating the stored footprint of a single key.
pub trait SizeEstimator {
    /// `Ok(None)` when the store has nothing to report for the key, an error
    /// when the lookup itself failed. Callers treat both as zero bytes.
    fn estimate(&self, db: DatabaseId, key: &str) -> Result<Option<ByteSize>>;
}
