//! Page-data loading that never fails.
//!
//! Every directory call made on behalf of a page goes through
//! [`DirectoryLoader`]. Errors are handed to the injected [`FetchObserver`]
//! and collapsed into an empty value, so a broken query turns into an empty
//! state on the page instead of an error response.

use std::fmt::Display;
use std::sync::Arc;
use tracing::warn;

use crate::models::{BusinessFilters, BusinessSummary, Category, CategoryFilters, ScamAlert};
use crate::services::{BusinessService, CategoryService, ComplaintService};

/// Receives failures that were swallowed while loading page data.
pub trait FetchObserver: Send + Sync {
    fn fetch_failed(&self, source: &'static str, error: &dyn Display);
}

/// Logs through `tracing` and counts failures per source.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn fetch_failed(&self, source: &'static str, error: &dyn Display) {
        warn!(source, error = %error, "Page data fetch failed, rendering empty state");
        metrics::counter!("page_fetch_failures_total", "source" => source).increment(1);
    }
}

#[derive(Clone)]
pub struct DirectoryLoader {
    categories: Arc<dyn CategoryService>,
    businesses: Arc<dyn BusinessService>,
    complaints: Arc<dyn ComplaintService>,
    observer: Arc<dyn FetchObserver>,
}

impl DirectoryLoader {
    #[must_use]
    pub fn new(
        categories: Arc<dyn CategoryService>,
        businesses: Arc<dyn BusinessService>,
        complaints: Arc<dyn ComplaintService>,
        observer: Arc<dyn FetchObserver>,
    ) -> Self {
        Self {
            categories,
            businesses,
            complaints,
            observer,
        }
    }

    fn or_default<T: Default, E: Display>(&self, source: &'static str, result: Result<T, E>) -> T {
        result.unwrap_or_else(|e| {
            self.observer.fetch_failed(source, &e);
            T::default()
        })
    }

    /// Active categories, each with its count of active businesses.
    ///
    /// Issues one count query per category; a failed count shows as 0.
    pub async fn categories_with_counts(&self) -> Vec<Category> {
        let records = self.or_default(
            "categories",
            self.categories
                .get_all_categories(CategoryFilters::active())
                .await,
        );

        let mut categories = Vec::with_capacity(records.len());
        for record in records {
            let count = self
                .businesses
                .search_businesses(BusinessFilters::active_in_category(record.id), 1, 1)
                .await
                .map(|page| page.pagination.total);
            let count = self.or_default("category_business_count", count);
            categories.push(Category::from_record(record, count));
        }

        categories
    }

    pub async fn scam_alerts(&self, limit: u64) -> Vec<ScamAlert> {
        let mut alerts = self.or_default(
            "scam_alerts",
            self.complaints.recent_scam_alerts(limit).await,
        );
        alerts.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        alerts
    }

    /// `None` both for an unknown id and for a failed lookup.
    pub async fn business_profile(&self, id: i32) -> Option<BusinessSummary> {
        self.or_default(
            "business_profile",
            self.businesses.get_business_profile(id).await,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::models::BusinessStatus;

    fn build_loader(
        categories: Option<Vec<crate::models::CategoryRecord>>,
        businesses: StubBusinesses,
        alerts: Option<Vec<ScamAlert>>,
    ) -> (DirectoryLoader, Arc<RecordingObserver>, Arc<StubBusinesses>) {
        let observer = Arc::new(RecordingObserver::default());
        let businesses = Arc::new(businesses);
        let loader = DirectoryLoader::new(
            Arc::new(StubCategories(categories)),
            businesses.clone(),
            Arc::new(StubComplaints(alerts)),
            observer.clone(),
        );
        (loader, observer, businesses)
    }

    #[tokio::test]
    async fn test_counts_come_from_active_category_search() {
        let (loader, observer, businesses) = build_loader(
            Some(vec![record(1, "Food"), record(2, "Auto")]),
            StubBusinesses::with_counts(&[(1, 7), (2, 0)]),
            None,
        );

        let categories = loader.categories_with_counts().await;
        let counts: Vec<_> = categories.iter().map(|c| c.business_count).collect();
        assert_eq!(counts, vec![7, 0]);
        assert!(observer.failures.lock().unwrap().is_empty());

        let calls = businesses.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert!(calls
            .iter()
            .all(|f| f.status == Some(BusinessStatus::Active)));
    }

    #[tokio::test]
    async fn test_failed_count_defaults_to_zero() {
        let (loader, observer, _) = build_loader(
            Some(vec![record(1, "Food"), record(9, "Broken")]),
            StubBusinesses::with_counts(&[(1, 3)]),
            None,
        );

        let categories = loader.categories_with_counts().await;
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].business_count, 0);
        assert_eq!(
            *observer.failures.lock().unwrap(),
            vec!["category_business_count"]
        );
    }

    #[tokio::test]
    async fn test_category_failure_yields_empty_list() {
        let (loader, observer, businesses) =
            build_loader(None, StubBusinesses::with_counts(&[]), None);

        assert!(loader.categories_with_counts().await.is_empty());
        assert_eq!(*observer.failures.lock().unwrap(), vec!["categories"]);
        assert!(businesses.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scam_alerts_capped_and_failure_is_empty() {
        let many: Vec<_> = (0..25)
            .map(|i| alert(&format!("b{i}"), "2026-01-01T00:00:00Z"))
            .collect();
        let (loader, _, _) = build_loader(None, StubBusinesses::with_counts(&[]), Some(many));
        assert_eq!(loader.scam_alerts(20).await.len(), 20);

        let (loader, observer, _) = loader_failing_alerts();
        assert!(loader.scam_alerts(20).await.is_empty());
        assert_eq!(*observer.failures.lock().unwrap(), vec!["scam_alerts"]);
    }

    fn loader_failing_alerts() -> (DirectoryLoader, Arc<RecordingObserver>, Arc<StubBusinesses>) {
        build_loader(Some(Vec::new()), StubBusinesses::with_counts(&[]), None)
    }

    #[tokio::test]
    async fn test_business_profile_missing_or_failed_is_none() {
        let mut stub = StubBusinesses::with_counts(&[]);
        stub.profile = Some(BusinessSummary {
            id: 4,
            name: "Bakery".to_string(),
            slug: "bakery".to_string(),
            category_id: 1,
            city: None,
            state: None,
            status: "active".to_string(),
        });
        let (loader, observer, _) = build_loader(None, stub, None);

        assert_eq!(
            loader.business_profile(4).await.map(|b| b.name).as_deref(),
            Some("Bakery")
        );
        assert!(loader.business_profile(5).await.is_none());
        assert!(observer.failures.lock().unwrap().is_empty());

        assert!(loader.business_profile(-1).await.is_none());
        assert_eq!(*observer.failures.lock().unwrap(), vec!["business_profile"]);
    }
}
