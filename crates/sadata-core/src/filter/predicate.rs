use super::declaration::FilterDeclaration;
use crate::errors::{QueryError, Result};
use crate::query::Filters;

/// String form of an absent attribute value.
pub const NULL_VALUE: &str = "null";

/// Whether `record` satisfies every filter in `filters`.
///
/// Each declared attribute, in string form, must equal one of the filter's
/// allowed values. Names outside the declaration do not constrain; reject
/// them up front with [`validate_filter_keys`].
pub fn matches<T>(filters: &Filters, record: &T, declaration: &FilterDeclaration<T>) -> bool {
    filters.iter().all(|(name, allowed)| {
        let Some(accessor) = declaration.accessor(name) else {
            return true;
        };
        let value = accessor(record).unwrap_or_else(|| NULL_VALUE.to_string());
        allowed.contains(&value)
    })
}

/// Keep the matching records, in their original order.
pub fn apply_filters<T>(
    filters: &Filters,
    records: Vec<T>,
    declaration: &FilterDeclaration<T>,
) -> Vec<T> {
    if filters.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| matches(filters, record, declaration))
        .collect()
}

/// Check every filter name against the declaration.
///
/// # Errors
///
/// `UNKNOWN_FILTER_KEY` for the first undeclared name.
pub fn validate_filter_keys<T>(filters: &Filters, declaration: &FilterDeclaration<T>) -> Result<()> {
    match filters.keys().find(|name| !declaration.contains(name)) {
        Some(unknown) => Err(QueryError::unknown_filter_key(unknown)),
        None => Ok(()),
    }
}
