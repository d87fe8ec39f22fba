// crates/shared-kernel/src/value_objects/mod.rs
pub mod byte_size;
pub mod database;

pub use byte_size::{ByteSize, ScaledSize};
pub use database::{DatabaseId, KeyCountHint};
