//! `SeaORM` implementation of the `BusinessService` trait.

use async_trait::async_trait;

use crate::db::Store;
use crate::models::{BusinessFilters, BusinessSummary, Pagination, SearchPage};
use crate::services::{BusinessService, DirectoryError};

pub struct SeaOrmBusinessService {
    store: Store,
}

impl SeaOrmBusinessService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BusinessService for SeaOrmBusinessService {
    async fn search_businesses(
        &self,
        filters: BusinessFilters,
        page: u64,
        page_size: u64,
    ) -> Result<SearchPage, DirectoryError> {
        if page == 0 || page_size == 0 {
            return Err(DirectoryError::Validation(
                "page and page_size must be positive".to_string(),
            ));
        }

        let (items, total) = self
            .store
            .search_businesses(&filters, page, page_size)
            .await?;

        Ok(SearchPage {
            items,
            pagination: Pagination::new(total, page, page_size),
        })
    }

    async fn get_business_profile(
        &self,
        id: i32,
    ) -> Result<Option<BusinessSummary>, DirectoryError> {
        if id <= 0 {
            return Ok(None);
        }
        Ok(self.store.get_business(id).await?)
    }
}
