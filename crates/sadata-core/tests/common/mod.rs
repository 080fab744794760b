use std::collections::BTreeSet;

use sadata_core::filter::{Accessor, FilterDeclaration};
use sadata_core::{Filters, QueryParams};

/// Build a parameter map from `(key, values)` pairs
#[allow(dead_code)]
pub fn params(entries: &[(&str, &[&str])]) -> QueryParams {
    entries
        .iter()
        .fold(QueryParams::new(), |acc, (key, values)| {
            acc.with(*key, values.iter().copied())
        })
}

/// Build a filter map from `(name, allowed values)` pairs
#[allow(dead_code)]
pub fn filters(entries: &[(&str, &[&str])]) -> Filters {
    entries
        .iter()
        .map(|(name, values)| {
            let allowed: BTreeSet<String> = values.iter().map(|v| v.to_string()).collect();
            (name.to_string(), allowed)
        })
        .collect()
}

/// Minimal record used by predicate tests
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub nickname: Option<String>,
}

#[allow(dead_code)]
pub fn person(name: &str, age: u32) -> Person {
    Person {
        name: name.to_string(),
        age,
        nickname: None,
    }
}

#[allow(dead_code)]
pub fn person_declaration() -> FilterDeclaration<Person> {
    let entries: [(&'static str, Accessor<Person>); 3] = [
        ("name", |p| Some(p.name.clone())),
        ("age", |p| Some(p.age.to_string())),
        ("nickname", |p| p.nickname.clone()),
    ];
    FilterDeclaration::new("Person", entries).unwrap()
}
