//! Keyset pagination.
//!
//! A page is fetched as `max_results + 1` records strictly after the position
//! carried by the incoming token. The extra record only signals that more data
//! exists; it is dropped and the next token is minted from the sort key of the
//! last returned record.

use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;

use crate::cursor;
use crate::errors::{QueryError, Result};
use crate::query::params::NEXT_TOKEN_KEY;
use crate::query::MaxResults;

/// A page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// At most `max_results` records, in sort-key order.
    pub data: Vec<T>,
    /// Token for the following page; `None` on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// A last page.
    pub fn terminal(data: Vec<T>) -> Self {
        Self {
            data,
            next_token: None,
        }
    }

    pub fn has_more(&self) -> bool {
        self.next_token.is_some()
    }

    /// Build a page from an overshot fetch of up to `limit + 1` records.
    ///
    /// When `raw` holds more than `limit` records it is truncated to `limit`
    /// and `cursor_fn` mints the next token from the last kept record.
    ///
    /// # Errors
    ///
    /// Whatever `cursor_fn` returns.
    pub fn from_overshot(
        mut raw: Vec<T>,
        limit: usize,
        cursor_fn: impl FnOnce(&T) -> Result<String>,
    ) -> Result<Self> {
        if raw.len() <= limit {
            return Ok(Self::terminal(raw));
        }
        raw.truncate(limit);
        let next_token = raw.last().map(cursor_fn).transpose()?;
        Ok(Self {
            data: raw,
            next_token,
        })
    }

    /// Replace the data, keeping the next token.
    pub fn map_data<U>(self, f: impl FnOnce(Vec<T>) -> Vec<U>) -> Page<U> {
        Page {
            data: f(self.data),
            next_token: self.next_token,
        }
    }
}

/// Decode a token into the sort-key position it was minted for.
///
/// # Errors
///
/// `INVALID_PARAMETER_VALUE` on `nextToken` when the token does not verify
/// against `resource` or its position does not parse as a `K`.
pub fn resume_position<K: FromStr>(token: &str, resource: &str) -> Result<K> {
    let position = cursor::verify(token, resource)?;
    position
        .parse()
        .map_err(|_| QueryError::invalid_parameter_value(NEXT_TOKEN_KEY, token))
}

/// Fetch one page of the `resource` collection.
///
/// `fetch_ordered_after(after, n)` must return up to `n` records strictly
/// after `after` (or from the start when `None`), ascending by `sort_key`.
///
/// # Errors
///
/// Token errors from [`resume_position`] and any error from the fetch.
pub fn get_page<T, K, F, S>(
    resource: &str,
    max_results: MaxResults,
    next_token: Option<&str>,
    fetch_ordered_after: F,
    sort_key: S,
) -> Result<Page<T>>
where
    K: FromStr + Display,
    F: FnOnce(Option<&K>, usize) -> Result<Vec<T>>,
    S: Fn(&T) -> K,
{
    let after = next_token
        .map(|token| resume_position::<K>(token, resource))
        .transpose()?;

    let limit = max_results.get();
    let raw = fetch_ordered_after(after.as_ref(), limit + 1)?;

    Page::from_overshot(raw, limit, |last| {
        cursor::mint(&sort_key(last).to_string(), resource)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::QueryErrorKind;

    #[test]
    fn test_from_overshot_exact_limit_is_terminal() {
        let page = Page::from_overshot(vec![1, 2], 2, |_| Ok("x".into())).unwrap();
        assert_eq!(page.data, vec![1, 2]);
        assert!(!page.has_more());
    }

    #[test]
    fn test_from_overshot_truncates_and_mints_from_last_kept() {
        let page = Page::from_overshot(vec![1, 2, 3], 2, |last| Ok(last.to_string())).unwrap();
        assert_eq!(page.data, vec![1, 2]);
        assert_eq!(page.next_token.as_deref(), Some("2"));
    }

    #[test]
    fn test_serializes_without_absent_token() {
        let json = serde_json::to_value(Page::terminal(vec![1])).unwrap();
        assert_eq!(json, serde_json::json!({ "data": [1] }));
    }

    #[test]
    fn test_unparsable_position_is_invalid_token() {
        let token = cursor::mint("abc", "School").unwrap();
        let err = resume_position::<u64>(&token, "School").unwrap_err();
        assert_eq!(err.kind(), QueryErrorKind::InvalidParameterValue);
        assert_eq!(err.parameter(), Some(NEXT_TOKEN_KEY));
    }
}
