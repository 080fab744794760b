use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::filter::{Accessor, FilterDeclaration};
use crate::resource::Resource;

/// A school record.
///
/// `id` is the storage key and pagination order; it is never sent to clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    #[serde(skip_serializing)]
    pub id: u64,
    pub school_id: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub sector: Option<String>,
    #[serde(rename = "type")]
    pub school_type: Option<String>,
    pub phase: Option<String>,
    pub specialization: Option<String>,
    pub exam_no: Option<String>,
    pub province: Option<String>,
    pub district_municipality: Option<String>,
    pub local_municipality: Option<String>,
    pub postal_code: Option<String>,
}

fn declare() -> Result<FilterDeclaration<School>> {
    let entries: [(&'static str, Accessor<School>); 12] = [
        ("schoolId", |s| s.school_id.clone()),
        ("name", |s| s.name.clone()),
        ("status", |s| s.status.clone()),
        ("sector", |s| s.sector.clone()),
        ("type", |s| s.school_type.clone()),
        ("phase", |s| s.phase.clone()),
        ("specialization", |s| s.specialization.clone()),
        ("examNo", |s| s.exam_no.clone()),
        ("province", |s| s.province.clone()),
        ("districtMunicipality", |s| s.district_municipality.clone()),
        ("localMunicipality", |s| s.local_municipality.clone()),
        ("postalCode", |s| s.postal_code.clone()),
    ];
    FilterDeclaration::new(School::RESOURCE_TAG, entries)
}

impl Resource for School {
    const RESOURCE_TAG: &'static str = "School";
    const ID_FILTER: &'static str = "schoolId";
    type SortKey = u64;

    fn sort_key(&self) -> u64 {
        self.id
    }

    fn resource_id(&self) -> Option<String> {
        self.school_id.clone()
    }

    fn filter_declaration() -> Result<&'static FilterDeclaration<Self>> {
        static DECLARATION: OnceLock<Result<FilterDeclaration<School>>> = OnceLock::new();
        DECLARATION.get_or_init(declare).as_ref().map_err(Clone::clone)
    }
}
