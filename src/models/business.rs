use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::business_status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStatus {
    Active,
    Pending,
    Suspended,
}

impl BusinessStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => business_status::ACTIVE,
            Self::Pending => business_status::PENDING,
            Self::Suspended => business_status::SUSPENDED,
        }
    }
}

impl fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessFilters {
    pub category_id: Option<i32>,
    pub status: Option<BusinessStatus>,
}

impl BusinessFilters {
    /// Filters used for the per-category business counts.
    #[must_use]
    pub const fn active_in_category(category_id: i32) -> Self {
        Self {
            category_id: Some(category_id),
            status: Some(BusinessStatus::Active),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSummary {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub category_id: i32,
    pub city: Option<String>,
    pub state: Option<String>,
    pub status: String,
}

impl BusinessSummary {
    /// "City, ST", whichever parts are present.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        join_location(self.city.as_deref(), self.state.as_deref())
    }
}

pub(crate) fn join_location(city: Option<&str>, state: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [city, state]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl Pagination {
    #[must_use]
    pub const fn new(total: u64, page: u64, page_size: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };
        Self {
            total,
            page,
            page_size,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchPage {
    pub items: Vec<BusinessSummary>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        assert_eq!(BusinessStatus::Active.as_str(), "active");
        assert_eq!(BusinessStatus::Suspended.to_string(), "suspended");
    }

    #[test]
    fn test_pagination_pages() {
        assert_eq!(Pagination::new(0, 1, 10).total_pages, 0);
        assert_eq!(Pagination::new(10, 1, 10).total_pages, 1);
        assert_eq!(Pagination::new(11, 1, 10).total_pages, 2);
        assert_eq!(Pagination::new(5, 1, 0).total_pages, 0);
    }

    #[test]
    fn test_location_skips_blank_parts() {
        assert_eq!(
            join_location(Some("Austin"), Some("TX")).as_deref(),
            Some("Austin, TX")
        );
        assert_eq!(join_location(Some(" "), Some("TX")).as_deref(), Some("TX"));
        assert_eq!(join_location(None, None), None);
    }
}
