use crate::models::{BusinessFilters, BusinessSummary, CategoryRecord, NewReview, ScamAlert};
use anyhow::Result;
use chrono::SecondsFormat;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;
pub mod seed;

pub use repositories::business::NewBusiness;
pub use repositories::category::NewCategory;
pub use repositories::complaint::NewComplaint;

/// RFC 3339 UTC with second precision, so lexical order matches time order.
#[must_use]
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        // Every pooled connection to `:memory:` would get its own empty database.
        let max_connections = if db_url.contains(":memory:") {
            1
        } else {
            let path_str = db_url.trim_start_matches("sqlite:").trim_start_matches("//");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
            max_connections
        };
        let min_connections = min_connections.min(max_connections);

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn category_repo(&self) -> repositories::category::CategoryRepository {
        repositories::category::CategoryRepository::new(self.conn.clone())
    }

    fn business_repo(&self) -> repositories::business::BusinessRepository {
        repositories::business::BusinessRepository::new(self.conn.clone())
    }

    fn complaint_repo(&self) -> repositories::complaint::ComplaintRepository {
        repositories::complaint::ComplaintRepository::new(self.conn.clone())
    }

    fn review_repo(&self) -> repositories::review::ReviewRepository {
        repositories::review::ReviewRepository::new(self.conn.clone())
    }

    pub async fn list_categories(&self, active_only: bool) -> Result<Vec<CategoryRecord>> {
        self.category_repo().list(active_only).await
    }

    pub async fn add_category(&self, category: &NewCategory<'_>) -> Result<i32> {
        self.category_repo().insert(category).await
    }

    pub async fn count_categories(&self) -> Result<u64> {
        self.category_repo().count().await
    }

    pub async fn search_businesses(
        &self,
        filters: &BusinessFilters,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<BusinessSummary>, u64)> {
        self.business_repo().search(filters, page, page_size).await
    }

    pub async fn get_business(&self, id: i32) -> Result<Option<BusinessSummary>> {
        self.business_repo().get(id).await
    }

    pub async fn add_business(&self, business: &NewBusiness<'_>) -> Result<i32> {
        self.business_repo().insert(business).await
    }

    pub async fn count_businesses(&self) -> Result<u64> {
        self.business_repo().count().await
    }

    pub async fn recent_scam_alerts(&self, limit: u64) -> Result<Vec<ScamAlert>> {
        self.complaint_repo().recent_scam_alerts(limit).await
    }

    pub async fn add_complaint(&self, complaint: NewComplaint<'_>) -> Result<i32> {
        self.complaint_repo().insert(complaint).await
    }

    pub async fn count_complaints(&self) -> Result<u64> {
        self.complaint_repo().count().await
    }

    pub async fn add_review(&self, review: &NewReview) -> Result<i32> {
        self.review_repo().insert(review).await
    }

    pub async fn count_reviews_for_business(&self, business_id: i32) -> Result<u64> {
        self.review_repo().count_for_business(business_id).await
    }
}
