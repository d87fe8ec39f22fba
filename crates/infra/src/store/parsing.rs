use keyspace_analysis_ports::keyspace::DatabaseCatalog;
use keyspace_analysis_shared_kernel::{DatabaseId, KeyCountHint};
use log::debug;

const SERIALIZED_LENGTH: &str = "serializedlength:";

/// Parses the reply of `INFO keyspace`.
///
/// ```text
/// # Keyspace
/// db0:keys=12,expires=0,avg_ttl=0
/// db3:keys=4,expires=1,avg_ttl=7200
/// ```
///
/// Lines that do not describe a database are ignored.
pub fn parse_keyspace_info(reply: &str) -> DatabaseCatalog {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let parsed = parse_keyspace_line(line);
            if parsed.is_none() {
                debug!("skipping keyspace line {line:?}");
            }
            parsed
        })
        .collect()
}

fn parse_keyspace_line(line: &str) -> Option<(DatabaseId, KeyCountHint)> {
    let (name, fields) = line.split_once(':')?;
    let db = name.strip_prefix("db")?.parse::<u64>().ok()?;
    let keys = fields
        .split(',')
        .find_map(|field| field.strip_prefix("keys="))?
        .parse::<u64>()
        .ok()?;
    Some((DatabaseId::new(db), KeyCountHint::new(keys)))
}

/// Extracts `serializedlength` from a `DEBUG OBJECT` reply such as
/// `Value at:0x7f00 refcount:1 encoding:embstr serializedlength:6 lru:1 lru_seconds_idle:3`.
pub fn parse_serialized_length(reply: &str) -> Option<u64> {
    reply
        .split_whitespace()
        .find_map(|token| token.strip_prefix(SERIALIZED_LENGTH))
        .and_then(|value| value.parse().ok())
}
