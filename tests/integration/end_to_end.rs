use std::{collections::BTreeMap, fs};

use keyspace_analysis_domain::{config::AnalysisConfig, grouping::Delimiters};
use keyspace_analysis_infra::persistence::OutputFormat;
use keyspace_analysis_ports::{
    keyspace::{DatabaseCatalog, KeySource, SizeEstimator},
    sink::ReportSink,
};
use keyspace_analysis_shared_kernel::{ByteSize, DatabaseId, KeyCountHint, Result};
use keyspace_analysis_usecase::RunAnalysis;

/// Keyspace served from memory: database -> ordered (key, size) pairs.
struct MemoryKeyspace(BTreeMap<u64, Vec<(&'static str, Option<u64>)>>);

impl KeySource for MemoryKeyspace {
    fn databases(&self) -> Result<DatabaseCatalog> {
        Ok(self.0.iter().map(|(db, keys)| (DatabaseId::new(*db), KeyCountHint::new(keys.len() as u64))).collect())
    }

    fn keys(&self, db: DatabaseId, _hint: KeyCountHint) -> Result<Vec<String>> {
        Ok(self.0[&db.index()].iter().map(|(k, _)| (*k).to_string()).collect())
    }
}

impl SizeEstimator for MemoryKeyspace {
    fn estimate(&self, db: DatabaseId, key: &str) -> Result<Option<ByteSize>> {
        let size = self.0[&db.index()].iter().find(|(k, _)| *k == key).and_then(|(_, s)| *s);
        Ok(size.map(ByteSize::new))
    }
}

fn keyspace() -> MemoryKeyspace {
    MemoryKeyspace(BTreeMap::from([
        (0, vec![("session:a:1", Some(100)), ("session:a:2", Some(200)), ("cache:x", Some(50))]),
        (4, vec![("blob", Some(3 * 1024 * 1024)), ("tmp#1", None), ("tmp#2", Some(1536))]),
    ]))
}

#[test]
fn writes_sorted_csv_per_database() {
    let store = keyspace();
    let config = AnalysisConfig::new(Delimiters::new([":", "#"]), vec![], None).unwrap();
    let outcome = RunAnalysis::new(&store, &store).execute(&config).unwrap();
    assert_eq!(outcome.unavailable_estimates, 1);

    let dir = tempfile::tempdir().unwrap();
    OutputFormat::Csv.sink(dir.path(), "127.0.0.1-6379").save(&outcome.reports).unwrap();

    let db0 = fs::read_to_string(dir.path().join("redis-analysis-127.0.0.1-6379-0.csv")).unwrap();
    assert_eq!(db0, "Key,Count,Size\nsession:a:*,2,300.000 Bytes\ncache:*,1,50.000 Bytes\n");

    let db4 = fs::read_to_string(dir.path().join("redis-analysis-127.0.0.1-6379-4.csv")).unwrap();
    assert_eq!(db4, "Key,Count,Size\nblob,1,3.000 MB\ntmp#*,2,1.500 KB\n");
}

#[test]
fn json_output_carries_raw_and_scaled_sizes() {
    let store = keyspace();
    let config = AnalysisConfig::new(Delimiters::new([":"]), vec![DatabaseId::new(0)], None).unwrap();
    let outcome = RunAnalysis::new(&store, &store).execute(&config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    OutputFormat::Json.sink(dir.path(), "cache-6379").save(&outcome.reports).unwrap();

    let raw = fs::read_to_string(dir.path().join("redis-analysis-cache-6379-0.json")).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(rows[0]["key"], "session:a:*");
    assert_eq!(rows[0]["count"], 2);
    assert_eq!(rows[0]["size"], 300);
    assert_eq!(rows[1]["size_human"], "50.000 Bytes");
    assert!(!dir.path().join("redis-analysis-cache-6379-4.json").exists());
}
