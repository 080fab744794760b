//! Validated query value object.
//!
//! Every request's raw parameters pass through [`Query::from_params`], which
//! validates the key set and then extracts filters, pagination parameters and
//! resource ids. Downstream code never sees raw parameters.

pub mod filters;
pub mod params;

use std::collections::BTreeSet;

pub use filters::{extract_filters, Filters};
pub use params::{
    extract_max_results, extract_next_token, extract_resource_ids, validate_parameters,
    MaxResults, QueryParams,
};

use crate::errors::Result;

/// Validated query: filters, optional pagination parameters and resource ids.
///
/// Only constructible through [`Query::from_params`], so a `Query` with a
/// `next_token` always has `max_results`, and `max_results` never coexists
/// with resource ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    filters: Filters,
    max_results: Option<MaxResults>,
    next_token: Option<String>,
    resource_ids: BTreeSet<String>,
}

impl Query {
    /// Validate and extract a query from raw request parameters.
    ///
    /// # Errors
    ///
    /// The first validation or extraction failure, see
    /// [`validate_parameters`], [`extract_filters`], [`extract_max_results`],
    /// [`extract_next_token`] and [`extract_resource_ids`].
    pub fn from_params(params: &QueryParams) -> Result<Self> {
        validate_parameters(params)?;

        Ok(Self {
            filters: extract_filters(params)?,
            max_results: extract_max_results(params)?,
            next_token: extract_next_token(params)?,
            resource_ids: extract_resource_ids(params)?,
        })
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn max_results(&self) -> Option<MaxResults> {
        self.max_results
    }

    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn resource_ids(&self) -> &BTreeSet<String> {
        &self.resource_ids
    }

    pub fn is_paginated(&self) -> bool {
        self.max_results.is_some()
    }

    pub fn has_next_token(&self) -> bool {
        self.next_token.is_some()
    }

    pub fn has_resource_ids(&self) -> bool {
        !self.resource_ids.is_empty()
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_give_empty_query() {
        let query = Query::from_params(&QueryParams::new()).unwrap();
        assert_eq!(query, Query::default());
        assert!(!query.is_paginated());
        assert!(!query.has_next_token());
        assert!(!query.has_resource_ids());
    }

    #[test]
    fn test_paginated_query() {
        let params = QueryParams::new()
            .with("maxResults", ["2"])
            .with("nextToken", ["abc"]);
        let query = Query::from_params(&params).unwrap();
        assert!(query.is_paginated());
        assert_eq!(query.max_results().map(MaxResults::get), Some(2));
        assert_eq!(query.next_token(), Some("abc"));
    }
}
