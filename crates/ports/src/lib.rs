//! # Ports
//!
//! Interface definitions for the collaborators around the analysis core.
//!
//! - [`keyspace`]: database enumeration, key listing and size estimation
//! - [`sink`]: persistence of finished report sets
//! - [`progress`]: progress reporting for long-running passes
//!
//! These ports keep the domain and use cases independent of any store
//! protocol or output format.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod keyspace;
pub mod progress;
pub mod sink;
