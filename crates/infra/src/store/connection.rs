use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
};

use keyspace_analysis_ports::keyspace::{DatabaseCatalog, KeySource, SizeEstimator};
use keyspace_analysis_shared_kernel::{ByteSize, DatabaseId, InfrastructureError, KeyCountHint, Result};
use log::{debug, info};
use redis::{Client, Connection, ConnectionAddr, ConnectionInfo, RedisConnectionInfo, RedisError};

use super::{
    parsing::{parse_keyspace_info, parse_serialized_length},
    settings::{ConnectionSettings, EstimateMode},
};

/// Bounds for the `COUNT` hint derived from a database's key count.
const MIN_SCAN_COUNT: u64 = 10;
const MAX_SCAN_COUNT: u64 = 1_000;

/// One synchronous connection to a store instance.
///
/// `SELECT` is connection state, so the currently selected database is
/// tracked to avoid re-issuing it for every key.
pub struct RedisKeyspace {
    connection: RefCell<Connection>,
    selected: Cell<Option<DatabaseId>>,
    settings: ConnectionSettings,
}

impl RedisKeyspace {
    /// Opens the connection and verifies it with `PING`.
    pub fn connect(settings: ConnectionSettings) -> Result<Self> {
        let address = settings.address();
        let connection_error = |e: RedisError| InfrastructureError::Connection {
            address: address.clone(),
            details: e.to_string(),
        };

        let client = match &settings.url {
            Some(url) => Client::open(url.as_str()),
            None => Client::open(connection_info(&settings)),
        }
        .map_err(connection_error)?;
        let mut connection = client
            .get_connection_with_timeout(settings.read_timeout)
            .map_err(connection_error)?;
        connection
            .set_read_timeout(Some(settings.read_timeout))
            .map_err(connection_error)?;

        let pong: String = redis::cmd("PING").query(&mut connection).map_err(connection_error)?;
        if !pong.eq_ignore_ascii_case("PONG") {
            return Err(InfrastructureError::UnexpectedReply { command: "PING".into(), reply: pong }.into());
        }
        info!("connected to {address}");

        Ok(Self { connection: RefCell::new(connection), selected: Cell::new(None), settings })
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    fn select(&self, db: DatabaseId) -> Result<()> {
        if self.selected.get() == Some(db) {
            return Ok(());
        }
        let mut connection = self.connection.borrow_mut();
        redis::cmd("SELECT")
            .arg(db.index())
            .query::<()>(&mut *connection)
            .map_err(command_error("SELECT"))?;
        self.selected.set(Some(db));
        Ok(())
    }

    fn scan_count(&self, hint: KeyCountHint) -> u64 {
        self.settings
            .scan_count
            .unwrap_or_else(|| hint.value().clamp(MIN_SCAN_COUNT, MAX_SCAN_COUNT))
    }
}

impl KeySource for RedisKeyspace {
    fn databases(&self) -> Result<DatabaseCatalog> {
        let mut connection = self.connection.borrow_mut();
        let reply: String = redis::cmd("INFO")
            .arg("keyspace")
            .query(&mut *connection)
            .map_err(command_error("INFO keyspace"))?;
        let catalog = parse_keyspace_info(&reply);
        debug!("keyspace reports {} database(s)", catalog.len());
        Ok(catalog)
    }

    /// Iterates `SCAN` until the cursor returns to 0. `SCAN` may return a key
    /// more than once while the keyspace is rehashed; repeats are dropped.
    /// A failed call fails the whole listing rather than truncating it.
    fn keys(&self, db: DatabaseId, hint: KeyCountHint) -> Result<Vec<String>> {
        self.select(db)?;
        let count = self.scan_count(hint);
        let mut connection = self.connection.borrow_mut();

        scan_all(|cursor| {
            redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg("*")
                .arg("COUNT")
                .arg(count)
                .query::<(u64, Vec<String>)>(&mut *connection)
                .map_err(|e| command_error("SCAN")(e).into())
        })
    }
}

/// Drives a `SCAN` style cursor from 0 back to 0, keeping the first
/// occurrence of every key. The first failed call aborts the listing.
fn scan_all<F>(mut fetch: F) -> Result<Vec<String>>
where
    F: FnMut(u64) -> Result<(u64, Vec<String>)>,
{
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    let mut cursor = 0_u64;
    loop {
        let (next, batch) = fetch(cursor)?;
        keys.extend(batch.into_iter().filter(|key| seen.insert(key.clone())));
        if next == 0 {
            return Ok(keys);
        }
        cursor = next;
    }
}

impl SizeEstimator for RedisKeyspace {
    fn estimate(&self, db: DatabaseId, key: &str) -> Result<Option<ByteSize>> {
        self.select(db)?;
        let mut connection = self.connection.borrow_mut();
        let bytes = match self.settings.estimate {
            EstimateMode::SerializedLength => {
                let reply: String = redis::cmd("DEBUG")
                    .arg("OBJECT")
                    .arg(key)
                    .query(&mut *connection)
                    .map_err(command_error("DEBUG OBJECT"))?;
                parse_serialized_length(&reply)
            }
            EstimateMode::MemoryUsage => redis::cmd("MEMORY")
                .arg("USAGE")
                .arg(key)
                .query::<Option<u64>>(&mut *connection)
                .map_err(command_error("MEMORY USAGE"))?,
        };
        Ok(bytes.map(ByteSize::new))
    }
}

fn connection_info(settings: &ConnectionSettings) -> ConnectionInfo {
    ConnectionInfo {
        addr: ConnectionAddr::Tcp(settings.host.clone(), settings.port),
        redis: RedisConnectionInfo { password: settings.password.clone(), ..Default::default() },
    }
}

fn command_error(command: &'static str) -> impl Fn(RedisError) -> InfrastructureError {
    move |e| InfrastructureError::Command { command: command.to_string(), details: e.to_string() }
}
