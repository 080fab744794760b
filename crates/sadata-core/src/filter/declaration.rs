use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{QueryError, Result};

/// Reads one filterable attribute of a record as a string. `None` stands for
/// an absent value.
pub type Accessor<T> = fn(&T) -> Option<String>;

/// Per-type registry of filterable attributes.
///
/// Built once per record type and shared read-only across requests.
pub struct FilterDeclaration<T> {
    resource: &'static str,
    accessors: BTreeMap<&'static str, Accessor<T>>,
}

impl<T> FilterDeclaration<T> {
    /// Build a declaration for the `resource` collection.
    ///
    /// # Errors
    ///
    /// `INTERNAL` if a filter name is declared twice.
    pub fn new(
        resource: &'static str,
        entries: impl IntoIterator<Item = (&'static str, Accessor<T>)>,
    ) -> Result<Self> {
        let mut accessors = BTreeMap::new();
        for (name, accessor) in entries {
            if accessors.insert(name, accessor).is_some() {
                return Err(QueryError::internal(format!(
                    "filter '{}' declared more than once for {}",
                    name, resource
                )));
            }
        }
        Ok(Self {
            resource,
            accessors,
        })
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn accessor(&self, name: &str) -> Option<Accessor<T>> {
        self.accessors.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    /// Declared filter names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.accessors.keys().copied()
    }
}

impl<T> fmt::Debug for FilterDeclaration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterDeclaration")
            .field("resource", &self.resource)
            .field("filters", &self.accessors.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::QueryErrorKind;

    struct Pet {
        name: String,
    }

    fn pet_name(p: &Pet) -> Option<String> {
        Some(p.name.clone())
    }

    #[test]
    fn test_duplicate_name_is_internal() {
        let entries: [(&'static str, Accessor<Pet>); 2] = [("name", pet_name), ("name", pet_name)];
        let err = FilterDeclaration::new("Pet", entries).unwrap_err();
        assert_eq!(err.kind(), QueryErrorKind::Internal);
    }

    #[test]
    fn test_lookup() {
        let decl = FilterDeclaration::new("Pet", [("name", pet_name as Accessor<Pet>)]).unwrap();
        assert_eq!(decl.resource(), "Pet");
        assert!(decl.contains("name"));
        assert!(!decl.contains("age"));
        let accessor = decl.accessor("name").unwrap();
        assert_eq!(
            accessor(&Pet {
                name: "rex".into()
            }),
            Some("rex".to_string())
        );
        assert_eq!(decl.names().collect::<Vec<_>>(), vec!["name"]);
    }
}
