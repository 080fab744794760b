//! sadata Core - request-time query contract layer
//!
//! This crate turns raw, multi-valued query-string parameters into a
//! validated [`Query`], including:
//! - Parameter validation and filter extraction (`filter-key-N` convention)
//! - Bounded pagination parameters and resource-scoped cursor tokens
//! - Declarative per-field filtering through [`FilterDeclaration`] registries
//! - Keyset pagination (fetch N+1)
//! - Error taxonomy, response envelopes and structured logging

pub mod cursor;
pub mod errors;
pub mod filter;
pub mod logging_facility;
pub mod model;
pub mod pagination;
pub mod query;
pub mod resource;
pub mod response;

pub use sadata_core_types as core_types;

#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use errors::{HttpStatus, QueryError, QueryErrorKind, Result};
pub use filter::FilterDeclaration;
pub use pagination::Page;
pub use query::{Filters, MaxResults, Query, QueryParams};
pub use resource::{DataSource, Resource};
pub use response::{ErrorResponse, Response};
