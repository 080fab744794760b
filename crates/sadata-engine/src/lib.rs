//! sadata Engine - Orchestration layer
//!
//! Runs one request end to end: parameter validation, filter key checks,
//! the fetch strategy the query calls for, post-fetch filtering and paging,
//! against an ordered data source.

pub mod commands;
pub mod store;

pub use commands::resource_query::{apply_resource_query, respond, ResourceQuery};
pub use store::InMemorySource;
