use sadata_core::model::{Hospital, School};
use sadata_engine::InMemorySource;

/// Five schools with ids 1..=5 across two provinces
#[allow(dead_code)]
pub fn schools() -> InMemorySource<School> {
    let provinces = ["Gauteng", "Limpopo", "Gauteng", "Limpopo", "Gauteng"];
    InMemorySource::from_records(provinces.iter().enumerate().map(|(i, province)| {
        let id = i as u64 + 1;
        School {
            id,
            school_id: Some(format!("{}", 500 + id)),
            name: Some(format!("School {}", id)),
            province: Some(province.to_string()),
            phase: if id == 5 { None } else { Some("PRIMARY".to_string()) },
            ..Default::default()
        }
    }))
}

/// Hospitals with ids 10, 20, 30
#[allow(dead_code)]
pub fn hospitals() -> InMemorySource<Hospital> {
    InMemorySource::from_records([
        hospital(10, "Central", "Gauteng"),
        hospital(20, "Regional", "Limpopo"),
        hospital(30, "District", "Gauteng"),
    ])
}

#[allow(dead_code)]
pub fn hospital(id: u64, category: &str, province: &str) -> Hospital {
    Hospital {
        hospital_id: id,
        name: Some(format!("Hospital {}", id)),
        category: Some(category.to_string()),
        province: Some(province.to_string()),
        district: None,
    }
}
