//! Complaint-derived views such as scam alerts.

use crate::models::ScamAlert;
use crate::services::DirectoryError;

#[async_trait::async_trait]
pub trait ComplaintService: Send + Sync {
    /// Active scam complaints with their business, newest first, at most `limit`.
    async fn recent_scam_alerts(&self, limit: u64) -> Result<Vec<ScamAlert>, DirectoryError>;
}
