//! `SeaORM` implementation of the `ReviewService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::db::Store;
use crate::models::NewReview;
use crate::services::{DirectoryError, ReviewService};

pub struct SeaOrmReviewService {
    store: Store,
}

impl SeaOrmReviewService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReviewService for SeaOrmReviewService {
    async fn submit_review(&self, review: NewReview) -> Result<i32, DirectoryError> {
        if !(1..=5).contains(&review.rating) {
            return Err(DirectoryError::Validation(format!(
                "rating {} is out of range",
                review.rating
            )));
        }

        let id = self.store.add_review(&review).await?;
        info!(
            review_id = id,
            business_id = review.business_id,
            rating = review.rating,
            "Review submitted"
        );
        Ok(id)
    }
}
