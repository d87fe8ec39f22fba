// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod presentation;

pub use bootstrap::{run, setup_logging};
pub use cli::{build_config, load_config};
