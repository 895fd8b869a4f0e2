//! Review persistence.

use crate::models::NewReview;
use crate::services::DirectoryError;

#[async_trait::async_trait]
pub trait ReviewService: Send + Sync {
    /// Stores a validated review and returns its id.
    async fn submit_review(&self, review: NewReview) -> Result<i32, DirectoryError>;
}
