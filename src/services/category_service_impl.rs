//! `SeaORM` implementation of the `CategoryService` trait.

use async_trait::async_trait;

use crate::db::Store;
use crate::models::{CategoryFilters, CategoryRecord};
use crate::services::{CategoryService, DirectoryError};

pub struct SeaOrmCategoryService {
    store: Store,
}

impl SeaOrmCategoryService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryService for SeaOrmCategoryService {
    async fn get_all_categories(
        &self,
        filters: CategoryFilters,
    ) -> Result<Vec<CategoryRecord>, DirectoryError> {
        Ok(self.store.list_categories(filters.active_only).await?)
    }
}
