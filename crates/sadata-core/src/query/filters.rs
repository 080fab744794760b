//! Filter extraction from the indexed `filter-key-N` convention.
//!
//! `filter-key-N=<name>` names a filter and `filter-key-N-value=<v>` (one or
//! more times) supplies its allowed values:
//!
//! ```text
//! filter-key-1=province&filter-key-1-value=Gauteng&filter-key-1-value=Limpopo
//! ```

use std::collections::{BTreeMap, BTreeSet};

use super::params::{is_filter_key, QueryParams, MAX_FILTER_VALUES};
use crate::errors::{QueryError, Result};

/// Filter name → allowed values. Each value set is non-empty and holds at
/// most [`MAX_FILTER_VALUES`] entries.
pub type Filters = BTreeMap<String, BTreeSet<String>>;

/// Extract the filter map.
///
/// Keys of the result are filter names, not the `filter-key-N` placeholders.
/// A `filter-key-N-value` without its `filter-key-N` is ignored.
///
/// # Errors
///
/// Fails fast on the first placeholder (in key order) that is:
/// - empty → `EMPTY_PARAMETER_VALUE`
/// - multi-valued → `MULTIPLE_PARAMETER_VALUES`
/// - an empty name → `INVALID_PARAMETER_VALUE`
/// - a name already seen → `DUPLICATE_FILTER_KEY`
/// - without values → `NO_FILTER_VALUES`
/// - with more than [`MAX_FILTER_VALUES`] values → `TOO_MANY_FILTER_VALUES`
pub fn extract_filters(params: &QueryParams) -> Result<Filters> {
    let mut filters = Filters::new();

    for (key, values) in params.iter().filter(|(key, _)| is_filter_key(key)) {
        let name = match values {
            [] => return Err(QueryError::empty_parameter_value(key)),
            [name] if name.is_empty() => return Err(QueryError::invalid_parameter_value(key, name)),
            [name] => name,
            _ => return Err(QueryError::multiple_parameter_values(key)),
        };

        if filters.contains_key(name) {
            return Err(QueryError::duplicate_filter_key(name));
        }

        let allowed = match params.get(&format!("{}-value", key)) {
            None | Some([]) => return Err(QueryError::no_filter_values(name)),
            Some(values) if values.len() > MAX_FILTER_VALUES => {
                return Err(QueryError::too_many_filter_values(name, MAX_FILTER_VALUES))
            }
            Some(values) => values.iter().cloned().collect(),
        };

        filters.insert(name.clone(), allowed);
    }

    Ok(filters)
}
