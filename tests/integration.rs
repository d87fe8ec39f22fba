//! End-to-end runs of the analysis pipeline against an in-memory keyspace.

#[path = "integration/end_to_end.rs"]
mod end_to_end;
