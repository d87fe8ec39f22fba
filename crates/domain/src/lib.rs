#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod grouping;
pub mod model;
