//! Query-string parameter grammar and the extractors for single-valued
//! parameters.
//!
//! Grammar:
//! - `maxResults` — integer page size in `1..=1000`
//! - `nextToken` — opaque pagination token, only valid together with `maxResults`
//! - `resourceId` — direct lookup ids, never together with `maxResults`
//! - `filter-key-<N>` / `filter-key-<N>-value` — see [`super::filters`]

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{QueryError, Result};

pub const MAX_RESULTS_KEY: &str = "maxResults";
pub const NEXT_TOKEN_KEY: &str = "nextToken";
pub const RESOURCE_ID_KEY: &str = "resourceId";

/// Allowed page sizes.
pub const MAX_RESULTS_RANGE: RangeInclusive<usize> = 1..=1000;

/// Upper bound on the allowed values of one filter.
pub const MAX_FILTER_VALUES: usize = 50;

fn filter_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^filter-key-[0-9]+$").expect("static pattern compiles"))
}

fn filter_value_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^filter-key-[0-9]+-value$").expect("static pattern compiles")
    })
}

/// `filter-key-<N>`
pub fn is_filter_key(key: &str) -> bool {
    filter_key_pattern().is_match(key)
}

/// `filter-key-<N>-value`
pub fn is_filter_value_key(key: &str) -> bool {
    filter_value_pattern().is_match(key)
}

fn is_known_parameter(key: &str) -> bool {
    key == MAX_RESULTS_KEY
        || key == NEXT_TOKEN_KEY
        || key == RESOURCE_ID_KEY
        || is_filter_key(key)
        || is_filter_value_key(key)
}

/// Raw multi-valued query parameters of one request.
///
/// Keys iterate in lexicographic order, which makes "first violation wins"
/// deterministic for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, Vec<String>>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored and repeated keys accumulate values in order.
    /// A key without `=` yields one empty value.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        url::form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect()
    }

    /// Replace all values of `key`. An empty `values` keeps the key present
    /// with no values.
    pub fn insert<K, V>(&mut self, key: K, values: impl IntoIterator<Item = V>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0
            .insert(key.into(), values.into_iter().map(Into::into).collect());
    }

    /// Builder form of [`QueryParams::insert`].
    pub fn with<K, V>(mut self, key: K, values: impl IntoIterator<Item = V>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(key, values);
        self
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in iter {
            map.entry(key).or_default().push(value);
        }
        Self(map)
    }
}

/// Validated page size, always inside [`MAX_RESULTS_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaxResults(usize);

impl MaxResults {
    /// `None` when `value` is out of range.
    pub fn new(value: usize) -> Option<Self> {
        MAX_RESULTS_RANGE.contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Check the parameter map for allowed keys and combinations.
///
/// Rules, in order:
/// 1. `nextToken` without `maxResults` → `MISSING_PARAMETER_VALUE`
/// 2. `maxResults` with `resourceId` → `INVALID_PARAMETER_COMBINATION`
/// 3. any key outside the grammar → `UNKNOWN_PARAMETER`
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_parameters(params: &QueryParams) -> Result<()> {
    if params.is_empty() {
        return Ok(());
    }

    if params.contains_key(NEXT_TOKEN_KEY) && !params.contains_key(MAX_RESULTS_KEY) {
        return Err(QueryError::missing_parameter(MAX_RESULTS_KEY));
    }

    if params.contains_key(MAX_RESULTS_KEY) && params.contains_key(RESOURCE_ID_KEY) {
        return Err(QueryError::invalid_parameter_combination(
            RESOURCE_ID_KEY,
            MAX_RESULTS_KEY,
        ));
    }

    match params.keys().find(|key| !is_known_parameter(key)) {
        Some(unknown) => Err(QueryError::unknown_parameter(unknown)),
        None => Ok(()),
    }
}

/// The one non-empty value of a single-valued parameter.
fn single_value<'a>(key: &str, values: &'a [String]) -> Result<&'a str> {
    match values {
        [] => Err(QueryError::empty_parameter_value(key)),
        [value] if value.is_empty() => Err(QueryError::empty_parameter_value(key)),
        [value] => Ok(value),
        _ => Err(QueryError::multiple_parameter_values(key)),
    }
}

/// Extract `maxResults`.
///
/// # Errors
///
/// `EMPTY_PARAMETER_VALUE`, `MULTIPLE_PARAMETER_VALUES`, or
/// `INVALID_PARAMETER_VALUE` when the value is not an integer in range.
pub fn extract_max_results(params: &QueryParams) -> Result<Option<MaxResults>> {
    let Some(values) = params.get(MAX_RESULTS_KEY) else {
        return Ok(None);
    };
    let raw = single_value(MAX_RESULTS_KEY, values)?;

    raw.parse::<i32>()
        .ok()
        .and_then(|v| usize::try_from(v).ok())
        .and_then(MaxResults::new)
        .map(Some)
        .ok_or_else(|| QueryError::invalid_parameter_value(MAX_RESULTS_KEY, raw))
}

/// Extract `nextToken` as the opaque token string.
///
/// # Errors
///
/// `EMPTY_PARAMETER_VALUE` or `MULTIPLE_PARAMETER_VALUES`.
pub fn extract_next_token(params: &QueryParams) -> Result<Option<String>> {
    let Some(values) = params.get(NEXT_TOKEN_KEY) else {
        return Ok(None);
    };
    single_value(NEXT_TOKEN_KEY, values).map(|token| Some(token.to_string()))
}

/// Extract the deduplicated `resourceId` values.
///
/// # Errors
///
/// `NO_RESOURCE_ID_VALUES` when the key is present without values.
pub fn extract_resource_ids(params: &QueryParams) -> Result<BTreeSet<String>> {
    match params.get(RESOURCE_ID_KEY) {
        None => Ok(BTreeSet::new()),
        Some([]) => Err(QueryError::no_resource_id_values(RESOURCE_ID_KEY)),
        Some(values) => Ok(values.iter().cloned().collect()),
    }
}
