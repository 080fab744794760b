use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::filter::{Accessor, FilterDeclaration};
use crate::resource::Resource;

/// A hospital record, ordered and identified by `hospital_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub hospital_id: u64,
    pub name: Option<String>,
    pub category: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
}

fn declare() -> Result<FilterDeclaration<Hospital>> {
    let entries: [(&'static str, Accessor<Hospital>); 5] = [
        ("hospitalId", |h| Some(h.hospital_id.to_string())),
        ("name", |h| h.name.clone()),
        ("category", |h| h.category.clone()),
        ("province", |h| h.province.clone()),
        ("district", |h| h.district.clone()),
    ];
    FilterDeclaration::new(Hospital::RESOURCE_TAG, entries)
}

impl Resource for Hospital {
    const RESOURCE_TAG: &'static str = "Hospital";
    const ID_FILTER: &'static str = "hospitalId";
    type SortKey = u64;

    fn sort_key(&self) -> u64 {
        self.hospital_id
    }

    fn resource_id(&self) -> Option<String> {
        Some(self.hospital_id.to_string())
    }

    fn canonical_id(raw: &str) -> Option<String> {
        raw.parse::<u64>().ok().map(|id| id.to_string())
    }

    fn filter_declaration() -> Result<&'static FilterDeclaration<Self>> {
        static DECLARATION: OnceLock<Result<FilterDeclaration<Hospital>>> = OnceLock::new();
        DECLARATION.get_or_init(declare).as_ref().map_err(Clone::clone)
    }
}
