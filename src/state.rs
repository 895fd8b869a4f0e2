use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    DirectoryLoader, FetchObserver, ReviewService, SeaOrmBusinessService, SeaOrmCategoryService,
    SeaOrmComplaintService, SeaOrmReviewService, TracingObserver,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub review_service: Arc<dyn ReviewService>,

    /// Page-data access that degrades to empty results.
    pub directory: DirectoryLoader,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::with_observer(config, Arc::new(TracingObserver)).await
    }

    pub async fn with_observer(
        config: Config,
        observer: Arc<dyn FetchObserver>,
    ) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::from_store(config, store, observer))
    }

    #[must_use]
    pub fn from_store(config: Config, store: Store, observer: Arc<dyn FetchObserver>) -> Self {
        let directory = DirectoryLoader::new(
            Arc::new(SeaOrmCategoryService::new(store.clone())),
            Arc::new(SeaOrmBusinessService::new(store.clone())),
            Arc::new(SeaOrmComplaintService::new(store.clone())),
            observer,
        );
        let review_service: Arc<dyn ReviewService> =
            Arc::new(SeaOrmReviewService::new(store.clone()));

        Self {
            config: Arc::new(config),
            store,
            review_service,
            directory,
        }
    }
}
