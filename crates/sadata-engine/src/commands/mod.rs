//! Request orchestration.

pub mod resource_query;
