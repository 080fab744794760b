//! Seams between the contract layer and the entity collections it serves.

use std::collections::BTreeSet;
use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::errors::Result;
use crate::filter::FilterDeclaration;

/// An entity type exposed through the API.
pub trait Resource: Sized + 'static {
    /// Tag embedded in pagination tokens, e.g. `"School"`.
    const RESOURCE_TAG: &'static str;

    /// Filter name that doubles as a direct id lookup, e.g. `"schoolId"`.
    const ID_FILTER: &'static str;

    /// Keyset pagination order. Its string form is the cursor position.
    type SortKey: Ord + Clone + Debug + Display + FromStr;

    fn sort_key(&self) -> Self::SortKey;

    /// Client-facing id, `None` when the record has none.
    fn resource_id(&self) -> Option<String>;

    /// The form of a client-supplied id that [`resource_id`](Self::resource_id)
    /// produces, or `None` if `raw` can never name a record.
    fn canonical_id(raw: &str) -> Option<String> {
        Some(raw.to_string())
    }

    /// Shape check for ids supplied by clients.
    fn is_well_formed_id(raw: &str) -> bool {
        Self::canonical_id(raw).is_some()
    }

    /// The type's filter declaration, built once.
    ///
    /// # Errors
    ///
    /// `INTERNAL` if the declaration is malformed.
    fn filter_declaration() -> Result<&'static FilterDeclaration<Self>>;
}

/// Ordered storage of one resource collection.
///
/// Every sequence is ascending by [`Resource::sort_key`].
pub trait DataSource<R: Resource> {
    /// # Errors
    ///
    /// Storage failures.
    fn fetch_all(&self) -> Result<Vec<R>>;

    /// # Errors
    ///
    /// Storage failures.
    fn fetch_by_id(&self, id: &str) -> Result<Option<R>>;

    /// Records whose resource id is in `ids`; unknown ids are skipped.
    ///
    /// # Errors
    ///
    /// Storage failures.
    fn fetch_by_ids(&self, ids: &BTreeSet<String>) -> Result<Vec<R>>;

    /// Up to `limit` records strictly after `after`, or from the start.
    ///
    /// # Errors
    ///
    /// Storage failures.
    fn fetch_ordered_after(&self, after: Option<&R::SortKey>, limit: usize) -> Result<Vec<R>>;
}
