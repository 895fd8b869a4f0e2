//! `SeaORM` implementation of the `ComplaintService` trait.

use async_trait::async_trait;

use crate::db::Store;
use crate::models::ScamAlert;
use crate::services::{ComplaintService, DirectoryError};

pub struct SeaOrmComplaintService {
    store: Store,
}

impl SeaOrmComplaintService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ComplaintService for SeaOrmComplaintService {
    async fn recent_scam_alerts(&self, limit: u64) -> Result<Vec<ScamAlert>, DirectoryError> {
        Ok(self.store.recent_scam_alerts(limit).await?)
    }
}
