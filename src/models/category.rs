use serde::{Deserialize, Serialize};

/// A category row as returned by the category service, before counts are attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Display record for category listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub business_count: u64,
}

impl Category {
    #[must_use]
    pub fn from_record(record: CategoryRecord, business_count: u64) -> Self {
        Self {
            id: record.id,
            name: record.name,
            slug: record.slug,
            description: record.description,
            icon: record.icon,
            business_count,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilters {
    pub active_only: bool,
}

impl CategoryFilters {
    #[must_use]
    pub const fn active() -> Self {
        Self { active_only: true }
    }
}
