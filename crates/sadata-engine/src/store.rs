use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use sadata_core::errors::{QueryError, Result};
use sadata_core::{DataSource, Resource};
use serde::de::DeserializeOwned;

/// In-memory ordered data source for one resource collection
///
/// Records are keyed by their sort key, so every fetch returns them in
/// ascending key order. Read-only once loaded; share it behind `&`.
#[derive(Debug, Clone)]
pub struct InMemorySource<R: Resource> {
    records: BTreeMap<R::SortKey, R>,
}

impl<R: Resource> InMemorySource<R> {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Build a source from records; a later record replaces an earlier one
    /// with the same sort key.
    pub fn from_records(records: impl IntoIterator<Item = R>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.sort_key(), r)).collect(),
        }
    }

    /// Load a JSON array of records
    ///
    /// # Errors
    ///
    /// `INTERNAL` if `json` is not an array of `R`.
    pub fn from_json(json: &str) -> Result<Self>
    where
        R: DeserializeOwned,
    {
        let records: Vec<R> = serde_json::from_str(json).map_err(|e| {
            QueryError::internal(format!("failed to load {} dataset: {}", R::RESOURCE_TAG, e))
        })?;
        tracing::debug!(resource = R::RESOURCE_TAG, count = records.len(), "dataset loaded");
        Ok(Self::from_records(records))
    }

    /// Insert a record, returning the one it replaced
    pub fn insert(&mut self, record: R) -> Option<R> {
        self.records.insert(record.sort_key(), record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Resource> Default for InMemorySource<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource + Clone> DataSource<R> for InMemorySource<R> {
    fn fetch_all(&self) -> Result<Vec<R>> {
        Ok(self.records.values().cloned().collect())
    }

    fn fetch_by_id(&self, id: &str) -> Result<Option<R>> {
        Ok(self
            .records
            .values()
            .find(|r| r.resource_id().as_deref() == Some(id))
            .cloned())
    }

    fn fetch_by_ids(&self, ids: &BTreeSet<String>) -> Result<Vec<R>> {
        Ok(self
            .records
            .values()
            .filter(|r| r.resource_id().is_some_and(|id| ids.contains(&id)))
            .cloned()
            .collect())
    }

    fn fetch_ordered_after(&self, after: Option<&R::SortKey>, limit: usize) -> Result<Vec<R>> {
        let lower = after.map_or(Bound::Unbounded, Bound::Excluded);
        Ok(self
            .records
            .range((lower, Bound::Unbounded))
            .take(limit)
            .map(|(_, r)| r.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sadata_core::model::Hospital;

    fn hospital(id: u64) -> Hospital {
        Hospital {
            hospital_id: id,
            ..Default::default()
        }
    }

    fn ids(records: &[Hospital]) -> Vec<u64> {
        records.iter().map(|h| h.hospital_id).collect()
    }

    #[test]
    fn test_records_kept_in_key_order() {
        let source = InMemorySource::from_records([hospital(3), hospital(1), hospital(2)]);
        assert_eq!(ids(&source.fetch_all().unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn test_fetch_ordered_after_is_exclusive() {
        let source = InMemorySource::from_records((1..=5).map(hospital));
        assert_eq!(ids(&source.fetch_ordered_after(None, 2).unwrap()), vec![1, 2]);
        assert_eq!(ids(&source.fetch_ordered_after(Some(&2), 10).unwrap()), vec![3, 4, 5]);
        assert!(source.fetch_ordered_after(Some(&5), 10).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_by_ids_skips_unknown() {
        let source = InMemorySource::from_records((1..=3).map(hospital));
        let wanted: BTreeSet<String> = ["3", "1", "9"].iter().map(|s| s.to_string()).collect();
        assert_eq!(ids(&source.fetch_by_ids(&wanted).unwrap()), vec![1, 3]);
    }

    #[test]
    fn test_from_json_rejects_bad_dataset() {
        let err = InMemorySource::<Hospital>::from_json("{}").unwrap_err();
        assert_eq!(err.kind(), sadata_core::QueryErrorKind::Internal);
    }
}
