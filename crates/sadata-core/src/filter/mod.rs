//! Declarative per-field filtering of in-memory record sets.
//!
//! Each record type declares its filterable attributes once in a
//! [`FilterDeclaration`]; the predicate functions match records against a
//! [`Filters`](crate::query::Filters) map by exact string equality.

pub mod declaration;
pub mod predicate;

pub use declaration::{Accessor, FilterDeclaration};
pub use predicate::{apply_filters, matches, validate_filter_keys, NULL_VALUE};
