//! Redis-backed implementation of the keyspace ports.

mod connection;
mod parsing;
mod settings;

pub use connection::RedisKeyspace;
pub use parsing::{parse_keyspace_info, parse_serialized_length};
pub use settings::{ConnectionSettings, EstimateMode};
