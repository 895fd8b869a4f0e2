//! Business search and profile lookup.

use crate::models::{BusinessFilters, BusinessSummary, SearchPage};
use crate::services::DirectoryError;

#[async_trait::async_trait]
pub trait BusinessService: Send + Sync {
    /// Searches businesses. `page` is 1-based; `pagination.total` is the full
    /// match count regardless of page size.
    async fn search_businesses(
        &self,
        filters: BusinessFilters,
        page: u64,
        page_size: u64,
    ) -> Result<SearchPage, DirectoryError>;

    /// Returns `Ok(None)` when no business has this id.
    async fn get_business_profile(&self, id: i32)
    -> Result<Option<BusinessSummary>, DirectoryError>;
}
