//! Core types shared across the sadata crates
//!
//! This crate provides foundational types used by the query layer,
//! the engine and the CLI:
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
