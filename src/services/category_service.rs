//! Read access to business categories.

use crate::models::{CategoryFilters, CategoryRecord};
use crate::services::DirectoryError;

#[async_trait::async_trait]
pub trait CategoryService: Send + Sync {
    /// Lists categories matching `filters`, in display order.
    async fn get_all_categories(
        &self,
        filters: CategoryFilters,
    ) -> Result<Vec<CategoryRecord>, DirectoryError>;
}
